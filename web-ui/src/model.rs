// Form state wired into yew's reducer hook

use looker_export_core::{ExportForm, FormAction};
use std::ops::Deref;
use std::rc::Rc;
use yew::Reducible;

/// Reducer state for the export form
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel(ExportForm);

impl FormModel {
    pub fn new(form: ExportForm) -> Self {
        Self(form)
    }
}

impl Deref for FormModel {
    type Target = ExportForm;

    fn deref(&self) -> &ExportForm {
        &self.0
    }
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut form = self.0.clone();
        form.apply(action);
        Rc::new(Self(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use looker_export_core::{ExploreView, ExportResult};

    fn model() -> Rc<FormModel> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Rc::new(FormModel::new(ExportForm::new(today)))
    }

    #[test]
    fn test_reduce_leaves_previous_state_untouched() {
        let before = model();
        let after = before
            .clone()
            .reduce(FormAction::SelectView(ExploreView::FactConsult));

        assert_eq!(before.view, ExploreView::FactFenixUserConsult);
        assert_eq!(after.view, ExploreView::FactConsult);
    }

    #[test]
    fn test_reduce_submission_cycle() {
        let loading = model().reduce(FormAction::SubmissionStarted);
        assert!(loading.loading);
        assert!(!loading.can_submit());

        let done = loading.reduce(FormAction::SubmissionCompleted(
            ExportResult::connection_failure(),
        ));
        assert!(!done.loading);
        assert_eq!(done.result, Some(ExportResult::connection_failure()));
    }
}
