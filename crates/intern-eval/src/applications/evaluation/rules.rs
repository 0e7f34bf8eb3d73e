/// Submitted skills found in `reference`, as a truncated percentage of the reference size.
///
/// Matching ignores case. Every matching entry in `skills` counts, so repeated entries
/// raise the percentage and it may exceed 100. An empty reference list yields 0.
pub(crate) fn skill_overlap(skills: &[String], reference: &[String]) -> u32 {
    if reference.is_empty() {
        return 0;
    }

    let matched = skills
        .iter()
        .filter(|skill| reference.iter().any(|expected| same_skill(skill, expected)))
        .count();

    let percentage = matched.saturating_mul(100) / reference.len();
    u32::try_from(percentage).unwrap_or(u32::MAX)
}

fn same_skill(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
