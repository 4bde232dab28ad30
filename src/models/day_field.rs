use clap::ValueEnum;

/// Editable fields of a day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayField {
    Date,
    Start,
    End,
}

impl DayField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayField::Date => "date",
            DayField::Start => "start",
            DayField::End => "end",
        }
    }
}
