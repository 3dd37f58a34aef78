use crate::domain::Motion;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct VoteTally {
    pub yes: usize,
    pub no: usize,
}

impl VoteTally {
    /// Tallies `name`'s YES and NO votes over every motion with a readable vote list.
    pub fn for_member(motions: &[Motion], name: &str) -> Self {
        motions
            .iter()
            .filter_map(Motion::votes)
            .flatten()
            .filter(|vote| vote.cast_by(name))
            .fold(VoteTally::default(), |tally, vote| VoteTally {
                yes: tally.yes + usize::from(vote.is_yes()),
                no: tally.no + usize::from(vote.is_no()),
            })
    }

    /// Share of YES among YES and NO votes as a percentage rounded to one decimal, ties to even.
    pub fn yes_percentage(&self) -> Option<f64> {
        let total = self.yes + self.no;
        if total == 0 {
            return None;
        }
        let percentage = self.yes as f64 / total as f64 * 100.0;
        Some((percentage * 10.0).round_ties_even() / 10.0)
    }
}
