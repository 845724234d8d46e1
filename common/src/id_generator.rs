use rand::Rng;

const ID_LENGTH: usize = 16;
const HEX: &[u8] = b"0123456789abcdef";

/// Random lowercase hex id for users and leaderboard entries.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect()
}
