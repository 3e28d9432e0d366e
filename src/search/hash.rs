//! Canonical schedule fingerprint for search deduplication.

use sha2::{Digest, Sha256};

use crate::models::Schedule;

/// Computes an order-independent SHA-256 fingerprint of a schedule.
///
/// Days are sorted by name and activities by id, and each placement
/// contributes its day, id, start and end. Every field is fed to the
/// hasher with a length prefix, so separators inside ids or day names
/// cannot make two different placement lists collide.
/// Two schedules with the same placements hash identically regardless
/// of day order or placement order. Empty days contribute nothing.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn canonical_hash(schedule: &Schedule) -> String {
    let mut days: Vec<_> = schedule.days().iter().collect();
    days.sort_by(|a, b| a.name().cmp(b.name()));

    let mut hasher = Sha256::new();
    for plan in days {
        let mut acts: Vec<_> = plan.activities().iter().collect();
        acts.sort_by(|a, b| {
            a.id.cmp(&b.id)
                .then(a.start_time.cmp(&b.start_time))
                .then(a.end_time.cmp(&b.end_time))
        });
        for a in acts {
            update_field(&mut hasher, plan.name());
            update_field(&mut hasher, &a.id);
            update_field(&mut hasher, &a.start_time.to_string());
            update_field(&mut hasher, &a.end_time.to_string());
        }
    }
    hex::encode(hasher.finalize())
}

fn update_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;
    use chrono::NaiveTime;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn act(id: &str, sh: u32, eh: u32) -> Activity {
        Activity::new(
            id,
            1,
            NaiveTime::from_hms_opt(sh, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(eh, 0, 0).unwrap(),
        )
    }

    fn week() -> Vec<(&'static str, Vec<Activity>)> {
        vec![
            ("Monday", vec![act("Math", 9, 10), act("Gym", 10, 11), act("Art", 13, 15)]),
            ("Tuesday", vec![act("Lab", 8, 12), act("Choir", 16, 17)]),
            ("Friday", vec![act("Chess", 14, 15)]),
        ]
    }

    fn build(days: Vec<(&'static str, Vec<Activity>)>) -> Schedule {
        days.into_iter()
            .fold(Schedule::new(), |s, (day, acts)| s.with_day(day, acts))
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let h = canonical_hash(&build(week()));
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_ignores_ordering() {
        let reference = canonical_hash(&build(week()));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let mut days = week();
            days.shuffle(&mut rng);
            for (_, acts) in days.iter_mut() {
                acts.shuffle(&mut rng);
            }
            assert_eq!(canonical_hash(&build(days)), reference);
        }
    }

    #[test]
    fn test_hash_detects_placement_changes() {
        let reference = canonical_hash(&build(week()));

        let mut moved_time = week();
        moved_time[0].1[0] = act("Math", 8, 9);
        assert_ne!(canonical_hash(&build(moved_time)), reference);

        let mut moved_day = week();
        let chess = moved_day[2].1.remove(0);
        moved_day[0].1.push(chess);
        assert_ne!(canonical_hash(&build(moved_day)), reference);

        let mut renamed = week();
        renamed[1].1[1] = act("Band", 16, 17);
        assert_ne!(canonical_hash(&build(renamed)), reference);
    }

    #[test]
    fn test_separators_in_ids_do_not_collide() {
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        let forged = Schedule::new().with_day(
            "Mon",
            vec![Activity::new("x:01:00:00-02:00:00|Mon:y", 1, t(3), t(4))],
        );
        let pair = Schedule::new().with_day("Mon", vec![act("x", 1, 2), act("y", 3, 4)]);
        assert_ne!(canonical_hash(&forged), canonical_hash(&pair));

        let day_split = Schedule::new().with_day("a:b", vec![act("c", 9, 10)]);
        let id_split = Schedule::new().with_day("a", vec![act("b:c", 9, 10)]);
        assert_ne!(canonical_hash(&day_split), canonical_hash(&id_split));
    }

    #[test]
    fn test_hash_ignores_empty_days() {
        let with_empty = build(week()).with_day("Sunday", vec![]);
        assert_eq!(canonical_hash(&with_empty), canonical_hash(&build(week())));
    }
}
