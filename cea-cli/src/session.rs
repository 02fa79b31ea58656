//! Session id generation: `session-<unix-ms>-<6 base36 chars>`.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn new_session_id() -> String {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or(0);
    format!("session-{millis}-{}", random_base36(6))
}

fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| BASE36[rng.random_range(0..BASE36.len())] as char).collect()
}

#[cfg(test)]
#[path = "session.test.rs"]
mod tests;
