use crate::extensions::date_time_ext::LongDate;
use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A council member and their term in office.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub name: &'static str,
    pub district: u8,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Member {
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Member", 4)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("district", &self.district)?;
        state.serialize_field("start", &self.start.long_date())?;
        state.serialize_field("end", &self.end.map(|end| end.long_date()))?;
        state.end()
    }
}

pub fn roster() -> &'static [Member] {
    ROSTER
}

pub fn find(name: &str) -> Option<&'static Member> {
    ROSTER.iter().find(|member| member.is_named(name))
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid roster date"),
    }
}

const fn member(name: &'static str, district: u8, start: NaiveDate, end: Option<NaiveDate>) -> Member {
    Member { name, district, start, end }
}

#[rustfmt::skip]
const ROSTER: &[Member] = &[
    member("Bob Blumenfield", 3, date(2013, 7, 1), None),
    member("Mike Bonin", 11, date(2013, 7, 1), Some(date(2022, 12, 12))),
    member("Joe Buscaino", 15, date(2012, 7, 1), Some(date(2022, 12, 12))),
    member("Gilbert A. Cedillo", 1, date(2013, 7, 1), Some(date(2022, 12, 12))),
    member("Kevin DeLeon", 14, date(2020, 10, 15), Some(date(2024, 12, 9))),
    member("Marqueece Harris-Dawson", 8, date(2015, 7, 1), None),
    member("Paul Koretz", 5, date(2009, 7, 1), Some(date(2022, 12, 9))),
    member("Paul Krekorian", 2, date(2010, 5, 1), Some(date(2024, 12, 9))),
    member("John Lee", 12, date(2019, 8, 30), None),
    member("Nury Martinez", 6, date(2013, 8, 9), Some(date(2022, 10, 12))),
    member("Mitch O'Farrell", 13, date(2013, 7, 1), Some(date(2022, 12, 12))),
    member("Curren D. Price", 9, date(2013, 7, 1), None),
    member("Nithya Raman", 4, date(2020, 12, 14), None),
    member("Mark Ridley-Thomas", 10, date(2020, 12, 14), Some(date(2022, 3, 17))),
    member("Monica Rodriguez", 7, date(2017, 7, 1), None),
    member("Herb Wesson", 10, date(2022, 3, 17), Some(date(2022, 8, 25))),
    member("Heather Hutt", 10, date(2023, 4, 11), None),
    member("Eunisses Hernandez", 1, date(2022, 12, 12), None),
    member("Tim McOsker", 15, date(2022, 12, 12), None),
    member("Traci Park", 11, date(2022, 12, 12), None),
    member("Hugo Soto-Martinez", 13, date(2022, 12, 12), None),
    member("Katy Yaroslavsky", 5, date(2022, 12, 12), None),
    member("Imelda Padilla", 6, date(2023, 8, 1), None),
    member("Ysabel Jurado", 14, date(2024, 12, 9), None),
    member("Adrin Nazarian", 2, date(2024, 12, 9), None),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn roster_contains_all_members() {
        assert_eq!(roster().len(), 25);
    }

    #[rstest]
    #[case::exact("Nithya Raman")]
    #[case::upper_case("NITHYA RAMAN")]
    #[case::surrounding_whitespace("  nithya raman ")]
    fn find_ignores_case(#[case] name: &str) {
        assert_eq!(find(name).map(|m| m.district), Some(4));
    }

    #[test]
    fn find_returns_none_for_unknown_member() {
        assert_eq!(find("Nobody"), None);
    }

    #[test]
    fn terms_never_end_before_they_start() {
        for member in roster() {
            if let Some(end) = member.end {
                assert!(end > member.start, "{} ends before starting", member.name);
            }
        }
    }

    #[test]
    fn serializes_dates_as_long_dates() {
        let member = find("Mike Bonin").unwrap();
        let json = serde_json::to_value(member).unwrap();

        assert_eq!(
            json,
            json!({
                "name": "Mike Bonin",
                "district": 11,
                "start": "July 01, 2013",
                "end": "December 12, 2022",
            })
        );
    }
}
