use chrono::NaiveDate;

/// Renders a date the way it is shown to readers, e.g. "July 01, 2013".
pub trait LongDate {
    fn long_date(&self) -> String;
}

impl LongDate for NaiveDate {
    fn long_date(&self) -> String {
        self.format("%B %d, %Y").to_string()
    }
}
