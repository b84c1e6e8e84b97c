//! Synthetic contact data for the list demo.
//!
//! Names are taken cyclically from a fixed pool so the set of section letters
//! is deterministic for a given count; phone numbers are random.

use rand::Rng;

/// A single entry in the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
}

/// Five first names per letter, A through Z.
pub const NAME_POOL: [&str; 130] = [
    "Alice", "Andrew", "Amy", "Aaron", "Amber",
    "Bob", "Brian", "Bella", "Brandon", "Brittany",
    "Charlie", "Chris", "Claire", "Cameron", "Chloe",
    "David", "Daniel", "Diana", "Derek", "Danielle",
    "Ethan", "Emma", "Eric", "Emily", "Evan",
    "Frank", "Fiona", "Fred", "Felicia", "Felix",
    "George", "Grace", "Gary", "Gina", "Grant",
    "Henry", "Hannah", "Harry", "Heather", "Hugo",
    "Isaac", "Isabella", "Ian", "Iris", "Ivan",
    "Jack", "Jessica", "James", "Julia", "Jordan",
    "Kevin", "Kate", "Kyle", "Karen", "Keith",
    "Laura", "Luke", "Lisa", "Leo", "Lily",
    "Michael", "Maria", "Mark", "Michelle", "Matthew",
    "Nathan", "Nicole", "Noah", "Nancy", "Nick",
    "Oliver", "Olivia", "Oscar", "Owen", "Octavia",
    "Peter", "Paula", "Paul", "Pamela", "Patrick",
    "Quinn", "Queenie", "Quentin", "Quincy", "Quest",
    "Robert", "Rachel", "Ryan", "Rebecca", "Richard",
    "Sarah", "Samuel", "Sophia", "Steven", "Stephanie",
    "Thomas", "Tina", "Tyler", "Taylor", "Tracy",
    "Ulysses", "Uma", "Urban", "Unity", "Ursula",
    "Victor", "Victoria", "Vincent", "Vanessa", "Vera",
    "William", "Wendy", "Walter", "Whitney", "Warren",
    "Xavier", "Xena", "Xander", "Xiomara", "Xion",
    "Yasmine", "Yuri", "Yvonne", "Yale", "Yolanda",
    "Zachary", "Zoe", "Zane", "Zelda", "Zack",
];

/// Generate `count` contacts using the thread-local RNG, sorted by name.
pub fn generate_contacts(count: usize) -> Vec<Contact> {
    generate_contacts_with(count, &mut rand::thread_rng())
}

/// Generate `count` contacts drawing phone digits from `rng`, sorted by name.
pub fn generate_contacts_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = (0..count)
        .map(|i| Contact {
            name: NAME_POOL[i % NAME_POOL.len()].to_string(),
            phone_number: random_phone_number(rng),
        })
        .collect();
    // Stable: duplicate names keep generation order.
    contacts.sort_by(|a, b| a.name.cmp(&b.name));
    contacts
}

fn random_phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = rng.gen_range(200..=999);
    let exchange = rng.gen_range(200..=999);
    let line = rng.gen_range(1000..=9999);
    format!("({area}) {exchange}-{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use regex::Regex;

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 50, 131, 300] {
            assert_eq!(generate_contacts_with(count, &mut rng).len(), count);
        }
    }

    #[test]
    fn output_is_sorted_by_name() {
        let contacts = generate_contacts(200);
        assert!(contacts.windows(2).all(|pair| pair[0].name <= pair[1].name));
    }

    #[test]
    fn names_are_drawn_cyclically_from_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let contacts = generate_contacts_with(135, &mut rng);
        let mut names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
        let mut expected: Vec<&str> = (0..135).map(|i| NAME_POOL[i % NAME_POOL.len()]).collect();
        names.sort_unstable();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn phone_numbers_follow_the_display_pattern() {
        let pattern = Regex::new(r"^\((\d{3})\) (\d{3})-(\d{4})$").expect("valid regex");
        for contact in generate_contacts(100) {
            let caps = pattern
                .captures(&contact.phone_number)
                .unwrap_or_else(|| panic!("bad phone number {}", contact.phone_number));
            let area: u32 = caps[1].parse().expect("area digits");
            let exchange: u32 = caps[2].parse().expect("exchange digits");
            let line: u32 = caps[3].parse().expect("line digits");
            assert!((200..=999).contains(&area));
            assert!((200..=999).contains(&exchange));
            assert!((1000..=9999).contains(&line));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = generate_contacts_with(20, &mut StdRng::seed_from_u64(42));
        let second = generate_contacts_with(20, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
