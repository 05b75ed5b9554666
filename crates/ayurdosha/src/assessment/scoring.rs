use super::dosha::{AnswerSet, Dosha, DoshaProfile};

/// Tallies recognized answers into a percentage profile.
///
/// Shares are rounded half-to-even and never renormalized, so a profile built from
/// three-way ties sums to 99. An answer set with no recognized codes yields `0/0/0`.
pub fn score_answers(answers: &AnswerSet) -> DoshaProfile {
    let mut counts = [0u32; 3];
    for dosha in answers.doshas() {
        counts[slot(dosha)] += 1;
    }

    let total: u32 = counts.iter().sum();
    if total == 0 {
        return DoshaProfile::default();
    }

    let share = |count: u32| -> u8 {
        let pct = (f64::from(count) / f64::from(total)) * 100.0;
        pct.round_ties_even().clamp(0.0, 100.0) as u8
    };

    DoshaProfile::new(
        share(counts[slot(Dosha::Vata)]),
        share(counts[slot(Dosha::Pitta)]),
        share(counts[slot(Dosha::Kapha)]),
    )
}

const fn slot(dosha: Dosha) -> usize {
    match dosha {
        Dosha::Vata => 0,
        Dosha::Pitta => 1,
        Dosha::Kapha => 2,
    }
}
