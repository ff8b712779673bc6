use std::collections::HashMap;

use crate::briefs::{BriefConfig, Question};
use crate::forms::submit::FormSubmission;
use crate::forms::validation::validate_answer;

pub const BRIEF_FORM_NAME: &str = "briefs";
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering(usize),
    Submitting,
    Success,
}

/// What a `next` call did.
#[derive(Debug, PartialEq)]
pub enum Advance {
    /// Validation failed or the flow is not accepting input; see `error`.
    Blocked,
    Moved(usize),
    /// Last step passed validation. The caller posts this and reports back
    /// through `submission_succeeded` / `submission_failed`.
    Submit(FormSubmission),
}

/// State of one multi-step brief. Answers only ever hold ids of the active
/// config's questions, and the step index stays inside the question list.
#[derive(Clone, Debug, PartialEq)]
pub struct BriefFlow {
    config: &'static BriefConfig,
    phase: Phase,
    /// Step the user was on; kept while submitting so a failure can return there.
    step: usize,
    answers: HashMap<&'static str, String>,
    error: Option<String>,
}

impl BriefFlow {
    pub fn new(config: &'static BriefConfig) -> Self {
        BriefFlow {
            config,
            phase: Phase::Answering(0),
            step: 0,
            answers: HashMap::new(),
            error: None,
        }
    }

    pub fn config(&self) -> &'static BriefConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.config.questions.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.total_steps()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == Phase::Success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rounded percentage shown on the progress bar.
    pub fn progress_percent(&self) -> u32 {
        (((self.step + 1) as f64 / self.total_steps() as f64) * 100.0).round() as u32
    }

    pub fn current_question(&self) -> &'static Question {
        &self.config.questions[self.step]
    }

    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn current_answer(&self) -> &str {
        self.answer(self.current_question().id).unwrap_or_default()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Where the success panel says we will get in touch.
    pub fn contact_hint(&self) -> Option<&str> {
        self.answer("email")
            .filter(|v| !v.is_empty())
            .or_else(|| self.answer("phone"))
    }

    /// Records the answer for the current step and clears any error.
    pub fn set_answer(&mut self, value: impl Into<String>) {
        if !matches!(self.phase, Phase::Answering(_)) {
            return;
        }
        let id = self.current_question().id;
        self.answers.insert(id, value.into());
        self.error = None;
    }

    pub fn next(&mut self) -> Advance {
        if !matches!(self.phase, Phase::Answering(_)) {
            return Advance::Blocked;
        }

        let question = self.current_question();
        if let Err(err) = validate_answer(question, self.answer(question.id)) {
            self.error = Some(err.message().to_string());
            return Advance::Blocked;
        }
        self.error = None;

        if !self.is_last_step() {
            self.step += 1;
            self.phase = Phase::Answering(self.step);
            return Advance::Moved(self.step);
        }

        self.phase = Phase::Submitting;
        Advance::Submit(self.submission())
    }

    pub fn prev(&mut self) {
        if let Phase::Answering(step) = self.phase {
            if step > 0 {
                self.step = step - 1;
                self.phase = Phase::Answering(self.step);
                self.error = None;
            }
        }
    }

    fn awaiting(&self, brief_id: &str) -> bool {
        self.phase == Phase::Submitting && self.config.id == brief_id
    }

    /// Outcomes for a brief other than the active one are dropped.
    pub fn submission_succeeded(&mut self, brief_id: &str) {
        if self.awaiting(brief_id) {
            self.phase = Phase::Success;
        }
    }

    pub fn submission_failed(&mut self, brief_id: &str) {
        if self.awaiting(brief_id) {
            self.step = self.total_steps() - 1;
            self.phase = Phase::Answering(self.step);
            self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
        }
    }

    /// Switching service starts over. Re-selecting the same brief keeps progress.
    pub fn switch_config(&mut self, config: &'static BriefConfig) {
        if self.config.id != config.id {
            *self = BriefFlow::new(config);
        }
    }

    /// Form body: discriminator, service id, then answers in question order.
    pub fn submission(&self) -> FormSubmission {
        self.config.questions.iter().fold(
            FormSubmission::new(BRIEF_FORM_NAME).field("service_id", self.config.id),
            |submission, q| match self.answer(q.id) {
                Some(value) => submission.field(q.id, value),
                None => submission,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefs::{get_brief, QuestionKind, BRIEFS};

    fn valid_answer(q: &Question) -> String {
        match q.kind {
            QuestionKind::Email => "client@example.com".to_string(),
            QuestionKind::Phone => "+1 555 000 0000".to_string(),
            QuestionKind::Choice => q.choices[0].to_string(),
            _ => format!("answer for {}", q.id),
        }
    }

    fn fill_to_last_step(flow: &mut BriefFlow) {
        while !flow.is_last_step() {
            let answer = valid_answer(flow.current_question());
            flow.set_answer(answer);
            assert!(matches!(flow.next(), Advance::Moved(_)));
        }
        let answer = valid_answer(flow.current_question());
        flow.set_answer(answer);
    }

    #[test]
    fn every_brief_reaches_success_exactly_once() {
        for config in BRIEFS.values() {
            let mut flow = BriefFlow::new(config);
            fill_to_last_step(&mut flow);

            let submission = match flow.next() {
                Advance::Submit(submission) => submission,
                other => panic!("{}: expected submit, got {:?}", config.id, other),
            };
            assert_eq!(submission.get("service_id"), Some(config.id));
            assert!(flow.is_submitting());

            // A second click while in flight does not post again.
            assert_eq!(flow.next(), Advance::Blocked);

            flow.submission_succeeded(config.id);
            assert!(flow.is_success());
            flow.submission_succeeded(config.id);
            flow.submission_failed(config.id);
            assert_eq!(flow.phase(), Phase::Success);
        }
    }

    #[test]
    fn empty_required_answer_never_advances() {
        let mut flow = BriefFlow::new(get_brief("branding").unwrap());
        assert_eq!(flow.next(), Advance::Blocked);
        assert_eq!(flow.step(), 0);
        assert_eq!(flow.error(), Some("This field is required"));

        flow.set_answer("");
        assert_eq!(flow.next(), Advance::Blocked);
        assert_eq!(flow.step(), 0);
    }

    #[test]
    fn editing_clears_the_error() {
        let mut flow = BriefFlow::new(get_brief("branding").unwrap());
        flow.next();
        assert!(flow.error().is_some());
        flow.set_answer("A");
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn email_step_rejects_malformed_address() {
        let mut flow = BriefFlow::new(get_brief("ui-ux").unwrap());
        flow.set_answer("Ada");
        assert_eq!(flow.next(), Advance::Moved(1));

        flow.set_answer("not-an-email");
        assert_eq!(flow.next(), Advance::Blocked);
        assert_eq!(flow.step(), 1);
        assert_eq!(flow.error(), Some("Please enter a valid email address"));

        flow.set_answer("a@b.co");
        assert_eq!(flow.next(), Advance::Moved(2));
    }

    #[test]
    fn optional_step_can_be_skipped() {
        let mut flow = BriefFlow::new(get_brief("ui-ux").unwrap());
        while flow.current_question().id != "competitors" {
            let answer = valid_answer(flow.current_question());
            flow.set_answer(answer);
            flow.next();
        }
        let step = flow.step();
        assert_eq!(flow.next(), Advance::Moved(step + 1));
    }

    #[test]
    fn prev_at_first_step_is_a_no_op() {
        let mut flow = BriefFlow::new(get_brief("packaging").unwrap());
        flow.prev();
        assert_eq!(flow.step(), 0);
        assert_eq!(flow.phase(), Phase::Answering(0));
    }

    #[test]
    fn prev_steps_back_and_clears_error() {
        let mut flow = BriefFlow::new(get_brief("packaging").unwrap());
        flow.set_answer("Ada");
        flow.next();
        flow.next();
        assert!(flow.error().is_some());
        flow.prev();
        assert_eq!(flow.step(), 0);
        assert_eq!(flow.error(), None);
        assert_eq!(flow.current_answer(), "Ada");
    }

    #[test]
    fn switching_service_resets_mid_flow() {
        let mut flow = BriefFlow::new(get_brief("branding").unwrap());
        flow.set_answer("Ada");
        flow.next();
        flow.set_answer("ada@example.com");
        flow.next();
        assert_eq!(flow.step(), 2);

        flow.switch_config(get_brief("social-media").unwrap());
        assert_eq!(flow.step(), 0);
        assert_eq!(flow.phase(), Phase::Answering(0));
        assert_eq!(flow.answer_count(), 0);
        assert_eq!(flow.config().id, "social-media");
    }

    #[test]
    fn failed_submission_returns_to_last_step() {
        let mut flow = BriefFlow::new(get_brief("graphic-design").unwrap());
        fill_to_last_step(&mut flow);
        assert!(matches!(flow.next(), Advance::Submit(_)));

        flow.submission_failed("graphic-design");
        assert_eq!(flow.phase(), Phase::Answering(flow.total_steps() - 1));
        assert_eq!(flow.error(), Some(SUBMIT_FAILED_MESSAGE));

        // Manual retry posts again.
        assert!(matches!(flow.next(), Advance::Submit(_)));
        flow.submission_succeeded("graphic-design");
        assert!(flow.is_success());
    }

    #[test]
    fn late_outcome_from_previous_brief_is_ignored() {
        let mut flow = BriefFlow::new(get_brief("branding").unwrap());
        fill_to_last_step(&mut flow);
        assert!(matches!(flow.next(), Advance::Submit(_)));

        flow.switch_config(get_brief("packaging").unwrap());
        fill_to_last_step(&mut flow);
        assert!(matches!(flow.next(), Advance::Submit(_)));

        flow.submission_succeeded("branding");
        assert!(flow.is_submitting());
        flow.submission_failed("branding");
        assert!(flow.is_submitting());
        assert_eq!(flow.error(), None);

        flow.submission_succeeded("packaging");
        assert!(flow.is_success());
    }

    #[test]
    fn answers_only_hold_known_questions() {
        let config = get_brief("social-media").unwrap();
        let mut flow = BriefFlow::new(config);
        fill_to_last_step(&mut flow);
        let Advance::Submit(_) = flow.next() else {
            panic!("expected submit");
        };
        // Input while submitting is ignored.
        flow.set_answer("late edit");
        for q in &config.questions {
            assert!(config.question(q.id).is_some());
        }
        assert_eq!(flow.answer_count(), config.questions.len());
        assert_ne!(flow.answer("phone"), Some("late edit"));
    }

    #[test]
    fn submission_body_order() {
        let mut flow = BriefFlow::new(get_brief("graphic-design").unwrap());
        flow.set_answer("Ada Lovelace");
        flow.next();
        flow.set_answer("ada@example.com");
        let body = flow.submission().encode();
        assert_eq!(
            body,
            "form-name=briefs&service_id=graphic-design&name=Ada%20Lovelace&email=ada%40example.com"
        );
    }

    #[test]
    fn progress_and_contact_hint() {
        let mut flow = BriefFlow::new(get_brief("graphic-design").unwrap());
        assert_eq!(flow.total_steps(), 7);
        assert_eq!(flow.progress_percent(), 14);
        assert_eq!(flow.contact_hint(), None);

        fill_to_last_step(&mut flow);
        assert_eq!(flow.progress_percent(), 100);
        assert_eq!(flow.contact_hint(), Some("client@example.com"));
    }
}
