use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{exact_sqrt, IndexPool, PlayerBoard, Tile};
use crate::error::GenerateError;

/// Green tiles each player must find.
pub const GREENS_PER_PLAYER: usize = 4;
/// Assassin tiles per player.
pub const BLACKS_PER_PLAYER: usize = 1;
/// Default 5x5 board.
pub const DEFAULT_BOARD_SIZE: usize = 25;

/// Board generation parameters, loadable from the `[board]` config table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub size: usize,
    pub greens_per_player: usize,
    pub blacks_per_player: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            size: DEFAULT_BOARD_SIZE,
            greens_per_player: GREENS_PER_PLAYER,
            blacks_per_player: BLACKS_PER_PLAYER,
        }
    }
}

impl GenerationConfig {
    /// Indexes the four draws consume from the shared pool.
    pub fn total_demand(&self) -> usize {
        2 * (self.greens_per_player + self.blacks_per_player)
    }
}

/// The two complementary boards produced by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPair {
    pub player_one: PlayerBoard,
    pub player_two: PlayerBoard,
}

/// Generate both player boards using OS entropy.
pub fn generate_boards(config: &GenerationConfig) -> Result<BoardPair, GenerateError> {
    generate_boards_with(&mut StdRng::from_os_rng(), config)
}

/// Generate both player boards from the given random source.
///
/// The draw order is fixed (player one's greens, player one's black, then
/// player two's pair) so a seeded source reproduces the same board pair.
/// All four draws consume one shared pool, which is what guarantees that
/// each player's special tiles are neutral on the other player's board.
pub fn generate_boards_with<R: Rng>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<BoardPair, GenerateError> {
    if exact_sqrt(config.size).is_none() {
        return Err(GenerateError::InvalidSize { size: config.size });
    }

    let mut pool = IndexPool::new(config.size);
    if config.total_demand() > pool.len() {
        return Err(GenerateError::InsufficientIndexes {
            requested: config.total_demand(),
            available: pool.len(),
        });
    }

    let green_one = pool.draw(rng, config.greens_per_player)?;
    let black_one = pool.draw(rng, config.blacks_per_player)?;
    let green_two = pool.draw(rng, config.greens_per_player)?;
    let black_two = pool.draw(rng, config.blacks_per_player)?;

    let player_one = PlayerBoard::from_index_sets(&black_one, &green_one, config.size)?;
    let player_two = PlayerBoard::from_index_sets(&black_two, &green_two, config.size)?;

    let pair = BoardPair {
        player_one,
        player_two,
    };
    debug_assert!(complementary(&pair.player_one, &pair.player_two));
    Ok(pair)
}

/// True when every special tile on one board is neutral on the other.
pub fn complementary(a: &PlayerBoard, b: &PlayerBoard) -> bool {
    if a.len() != b.len() {
        return false;
    }
    // No index may be special on both boards.
    (0..a.len()).all(|i| a.get(i) == Tile::Neutral || b.get(i) == Tile::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_boards_have_board_length() {
        let config = GenerationConfig::default();
        let pair = generate_boards_with(&mut seeded(1), &config).unwrap();
        assert_eq!(pair.player_one.len(), config.size);
        assert_eq!(pair.player_two.len(), config.size);
    }

    #[test]
    fn test_default_tile_counts() {
        let pair = generate_boards_with(&mut seeded(2), &GenerationConfig::default()).unwrap();
        for board in [&pair.player_one, &pair.player_two] {
            assert_eq!(board.count(Tile::Green), 4);
            assert_eq!(board.count(Tile::Black), 1);
            assert_eq!(board.count(Tile::Neutral), 20);
        }
    }

    #[test]
    fn test_boards_are_complementary() {
        for seed in 0..50 {
            let pair =
                generate_boards_with(&mut seeded(seed), &GenerationConfig::default()).unwrap();
            assert!(
                complementary(&pair.player_one, &pair.player_two),
                "seed {} produced overlapping special tiles",
                seed
            );
        }
    }

    #[test]
    fn test_special_indexes_are_distinct_across_the_pair() {
        let pair = generate_boards_with(&mut seeded(3), &GenerationConfig::default()).unwrap();
        let specials: Vec<usize> = (0..pair.player_one.len())
            .filter(|&i| {
                pair.player_one.get(i) != Tile::Neutral || pair.player_two.get(i) != Tile::Neutral
            })
            .collect();
        assert_eq!(specials.len(), 10);
    }

    #[test]
    fn test_same_seed_reproduces_the_pair() {
        let config = GenerationConfig::default();
        let first = generate_boards_with(&mut seeded(42), &config).unwrap();
        let second = generate_boards_with(&mut seeded(42), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let config = GenerationConfig::default();
        let first = generate_boards_with(&mut seeded(7), &config).unwrap();
        let second = generate_boards_with(&mut seeded(8), &config).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_non_square_size_is_invalid() {
        let config = GenerationConfig {
            size: 24,
            ..GenerationConfig::default()
        };
        let err = generate_boards_with(&mut seeded(4), &config).unwrap_err();
        assert_eq!(err, GenerateError::InvalidSize { size: 24 });
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let config = GenerationConfig {
            size: 0,
            ..GenerationConfig::default()
        };
        let err = generate_boards_with(&mut seeded(5), &config).unwrap_err();
        assert_eq!(err, GenerateError::InvalidSize { size: 0 });
    }

    #[test]
    fn test_too_small_board_cannot_supply_the_draws() {
        // 3x3 board, but the default draws need 10 indexes.
        let config = GenerationConfig {
            size: 9,
            ..GenerationConfig::default()
        };
        let err = generate_boards_with(&mut seeded(6), &config).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InsufficientIndexes {
                requested: 10,
                available: 9,
            }
        );
    }

    #[test]
    fn test_minimal_board_that_fits_the_draws() {
        // 4x4 board holds the default 10 draws with 6 neutrals left over.
        let config = GenerationConfig {
            size: 16,
            ..GenerationConfig::default()
        };
        let pair = generate_boards_with(&mut seeded(7), &config).unwrap();
        assert!(complementary(&pair.player_one, &pair.player_two));
        assert_eq!(pair.player_one.count(Tile::Neutral), 11);
    }

    #[test]
    fn test_generate_with_os_entropy_smoke() {
        let pair = generate_boards(&GenerationConfig::default()).unwrap();
        assert!(complementary(&pair.player_one, &pair.player_two));
    }
}
