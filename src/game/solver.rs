//! The textbook recursive solver: move n-1 out of the way, move the
//! biggest disk, move n-1 back on top. Produces the full ordered move
//! list up front; the main loop replays it on a timer.

/// Ordered (from, to) moves that transfer `n` disks from `from` to
/// `to` using `via` as scratch. `2^n - 1` moves for n >= 1; empty for
/// n == 0.
pub fn solve(n: usize, from: usize, via: usize, to: usize) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    if n > 0 {
        solve_into(n, from, via, to, &mut moves);
    }
    moves
}

fn solve_into(n: usize, from: usize, via: usize, to: usize, moves: &mut Vec<(usize, usize)>) {
    if n == 1 {
        moves.push((from, to));
        return;
    }
    solve_into(n - 1, from, to, via, moves);
    moves.push((from, to));
    solve_into(n - 1, via, from, to, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_count_is_two_to_the_n_minus_one() {
        for n in 1..=8 {
            assert_eq!(solve(n, 0, 1, 2).len(), (1 << n) - 1);
        }
        assert!(solve(0, 0, 1, 2).is_empty());
    }

    #[test]
    fn test_three_disk_solution() {
        assert_eq!(
            solve(3, 0, 1, 2),
            vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        );
    }

    #[test]
    fn test_replay_never_stacks_larger_on_smaller() {
        for n in 1..=8 {
            // Pegs hold disk sizes, largest first
            let mut pegs: [Vec<usize>; 3] = [(1..=n).rev().collect(), Vec::new(), Vec::new()];
            for (from, to) in solve(n, 0, 1, 2) {
                let disk = pegs[from].pop().expect("move from empty peg");
                if let Some(&top) = pegs[to].last() {
                    assert!(disk < top, "disk {} dropped on {}", disk, top);
                }
                pegs[to].push(disk);
            }
            assert!(pegs[0].is_empty());
            assert!(pegs[1].is_empty());
            assert_eq!(pegs[2].len(), n);
        }
    }
}
