//! Navbar chrome shared across the page tree.
//!
//! Anything that wants the page to itself (a full-screen gallery, say)
//! dispatches `Hide` through the context and `Show` when it is done. The
//! navbar is the only subscriber. Last dispatch wins.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chrome {
    pub nav_hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeAction {
    Hide,
    Show,
}

impl Reducible for Chrome {
    type Action = ChromeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let nav_hidden = action == ChromeAction::Hide;
        if self.nav_hidden == nav_hidden {
            return self;
        }
        Rc::new(Chrome { nav_hidden })
    }
}

pub type ChromeContext = UseReducerHandle<Chrome>;

#[derive(Properties, PartialEq)]
pub struct ChromeProviderProps {
    pub children: Children,
}

#[function_component(ChromeProvider)]
pub fn chrome_provider(props: &ChromeProviderProps) -> Html {
    let chrome = use_reducer(Chrome::default);

    html! {
        <ContextProvider<ChromeContext> context={chrome}>
            { for props.children.iter() }
        </ContextProvider<ChromeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[ChromeAction]) -> Chrome {
        *actions
            .iter()
            .fold(Rc::new(Chrome::default()), |state, action| state.reduce(*action))
    }

    #[test]
    fn starts_visible() {
        assert!(!Chrome::default().nav_hidden);
    }

    #[test]
    fn last_dispatch_wins() {
        assert!(run(&[ChromeAction::Hide]).nav_hidden);
        assert!(!run(&[ChromeAction::Hide, ChromeAction::Show]).nav_hidden);
        assert!(run(&[ChromeAction::Show, ChromeAction::Hide, ChromeAction::Hide]).nav_hidden);
    }

    #[test]
    fn repeated_action_keeps_state_pointer() {
        let state = Rc::new(Chrome::default());
        let same = state.clone().reduce(ChromeAction::Show);
        assert!(Rc::ptr_eq(&state, &same));
    }
}
