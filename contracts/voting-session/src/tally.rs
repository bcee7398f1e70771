/// Returns the index of the proposal with the most votes.
///
/// `vote_counts` must be given in proposal id order. Only a strictly greater
/// count replaces the current leader, so ties go to the lowest index. An
/// empty input yields 0.
pub fn winning_proposal<I>(vote_counts: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut winner = 0;
    let mut max_votes = 0;
    for (id, votes) in (0u64..).zip(vote_counts) {
        if votes > max_votes {
            max_votes = votes;
            winner = id;
        }
    }
    winner
}
