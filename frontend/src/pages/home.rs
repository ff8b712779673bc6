use yew::prelude::*;

use crate::components::{
    about::About,
    clients::Clients,
    contact::Contact,
    hero::Hero,
    portfolio::Portfolio,
    process::Process,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <About />
            <Portfolio />
            <Process />
            <Clients />
            <Testimonials />
            <Contact />
        </>
    }
}
