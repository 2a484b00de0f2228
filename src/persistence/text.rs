//! Stats text format
//!
//! Five lines of integers (high score, games played, shots fired, shots hit,
//! top hit percentage) followed by one line of comma-separated kill counts
//! in mob kind order.

use super::PersistenceError;
use crate::consts::NUM_MOB_KINDS;
use crate::stats::LifetimeStats;

pub fn encode(stats: &LifetimeStats) -> String {
    let kills = stats
        .kills_by_type
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n",
        stats.high_score,
        stats.games_played,
        stats.shots_fired,
        stats.shots_hit,
        stats.top_hit_percent,
        kills
    )
}

pub fn decode(text: &str) -> Result<LifetimeStats, PersistenceError> {
    let mut lines = text.lines();
    let mut next_number = |field: &'static str| -> Result<u32, PersistenceError> {
        let line = lines.next().ok_or(PersistenceError::MissingLine(field))?;
        parse(field, line)
    };

    let high_score = next_number("high score")?;
    let games_played = next_number("games played")?;
    let shots_fired = next_number("shots fired")?;
    let shots_hit = next_number("shots hit")?;
    let top_hit_percent = next_number("top hit percent")?;

    let kills_line = lines.next().ok_or(PersistenceError::MissingLine("kills"))?;
    let counts = kills_line
        .split(',')
        .map(|value| parse("kills", value))
        .collect::<Result<Vec<_>, _>>()?;
    let kills_by_type: [u32; NUM_MOB_KINDS] =
        counts.as_slice().try_into().map_err(|_| PersistenceError::KillCount {
            expected: NUM_MOB_KINDS,
            found: counts.len(),
        })?;

    Ok(LifetimeStats {
        high_score,
        games_played,
        shots_fired,
        shots_hit,
        top_hit_percent,
        kills_by_type,
    })
}

fn parse(field: &'static str, value: &str) -> Result<u32, PersistenceError> {
    value.trim().parse().map_err(|_| PersistenceError::BadNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LifetimeStats {
        LifetimeStats {
            high_score: 1250,
            games_played: 4,
            shots_fired: 310,
            shots_hit: 201,
            top_hit_percent: 72,
            kills_by_type: [60, 31, 12, 9, 2],
        }
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(encode(&sample()), "1250\n4\n310\n201\n72\n60,31,12,9,2\n");
    }

    #[test]
    fn test_decode_tolerates_crlf() {
        let stats = decode("1250\r\n4\r\n310\r\n201\r\n72\r\n60,31,12,9,2\r\n").unwrap();
        assert_eq!(stats, sample());
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode("1\n2\n3\n"), Err(PersistenceError::MissingLine("shots hit"))));
        assert!(matches!(
            decode("1\ntwo\n3\n4\n5\n0,0,0,0,0\n"),
            Err(PersistenceError::BadNumber {
                field: "games played",
                ..
            })
        ));
        assert!(matches!(
            decode("1\n2\n3\n4\n5\n0,0,0\n"),
            Err(PersistenceError::KillCount { expected: 5, found: 3 })
        ));
        assert!(matches!(decode("1\n2\n3\n4\n5\n"), Err(PersistenceError::MissingLine("kills"))));
    }
}
