// Export form view-model
//
// Holds everything the form shows and turns it into an ExportRequest.
// The UI layer only dispatches FormAction values and renders the fields.

use chrono::NaiveDate;

use crate::models::{ExploreView, ExportRequest, ExportResult, SENTINEL_END_DATE};
use crate::validation::{coerce_limit, default_start_date, format_iso_date, DEFAULT_LIMIT};

/// State of one export form instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportForm {
    pub view: ExploreView,

    /// `None` means "seven days before submission"
    pub start_date: Option<NaiveDate>,

    /// `None` means "the submission date"
    pub end_date: Option<NaiveDate>,

    /// Submit the sentinel end date instead of `end_date`
    pub no_end_date: bool,

    pub limit: u32,

    pub no_limit: bool,

    /// A submission is in flight
    pub loading: bool,

    /// Result of the last completed submission
    pub result: Option<ExportResult>,
}

/// Changes the UI can make to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SelectView(ExploreView),
    SetStartDate(Option<NaiveDate>),
    SetEndDate(Option<NaiveDate>),
    SetNoEndDate(bool),
    /// Raw text from the limit input
    SetLimitInput(String),
    SetNoLimit(bool),
    SubmissionStarted,
    SubmissionCompleted(ExportResult),
}

impl ExportForm {
    /// Fresh form as shown on mount
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: ExploreView::default(),
            start_date: Some(default_start_date(today)),
            end_date: Some(today),
            no_end_date: false,
            limit: DEFAULT_LIMIT,
            no_limit: false,
            loading: false,
            result: None,
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SelectView(view) => self.view = view,
            FormAction::SetStartDate(date) => self.start_date = date,
            FormAction::SetEndDate(date) => self.end_date = date,
            FormAction::SetNoEndDate(on) => self.no_end_date = on,
            FormAction::SetLimitInput(input) => self.limit = coerce_limit(&input),
            FormAction::SetNoLimit(on) => self.no_limit = on,
            FormAction::SubmissionStarted => {
                self.loading = true;
                self.result = None;
            }
            FormAction::SubmissionCompleted(result) => {
                self.loading = false;
                self.result = Some(result);
            }
        }
    }

    /// A new submission may start
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Request body for a submission made on `today`
    pub fn build_request(&self, today: NaiveDate) -> ExportRequest {
        let start_date = self.start_date.unwrap_or_else(|| default_start_date(today));
        let end_date = if self.no_end_date {
            SENTINEL_END_DATE.to_string()
        } else {
            format_iso_date(self.end_date.unwrap_or(today))
        };

        ExportRequest {
            explore: self.view,
            limit: self.limit,
            no_limit: self.no_limit,
            start_date: format_iso_date(start_date),
            end_date,
        }
    }

    /// Mark the form as loading and return the request to send
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submission(&mut self, today: NaiveDate) -> Option<ExportRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = self.build_request(today);
        self.apply(FormAction::SubmissionStarted);
        Some(request)
    }
}
