//! Partition contacts into alphabetical sections.

use crate::contacts::Contact;
use std::collections::BTreeMap;

/// Section key used for contacts whose name is empty.
pub const FALLBACK_SECTION: char = '#';

/// Contacts keyed by the uppercase first letter of their name.
pub type ContactGroups = BTreeMap<char, Vec<Contact>>;

/// Group contacts by initial, keeping their relative order within a section.
pub fn group_by_initial(contacts: impl IntoIterator<Item = Contact>) -> ContactGroups {
    let mut groups = ContactGroups::new();
    for contact in contacts {
        groups
            .entry(section_key(&contact.name))
            .or_default()
            .push(contact);
    }
    groups
}

pub fn section_key(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|ch| ch.to_uppercase().next())
        .unwrap_or(FALLBACK_SECTION)
}

pub fn total_members(groups: &ContactGroups) -> usize {
    groups.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::{NAME_POOL, generate_contacts};
    use std::collections::BTreeSet;

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            phone_number: "(555) 555-5555".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(group_by_initial(Vec::new()).is_empty());
    }

    #[test]
    fn section_sizes_sum_to_input_len() {
        for count in [0, 1, 7, 50, 130, 260] {
            let groups = group_by_initial(generate_contacts(count));
            assert_eq!(total_members(&groups), count);
        }
    }

    #[test]
    fn members_start_with_their_section_key() {
        let groups = group_by_initial(generate_contacts(130));
        for (key, members) in &groups {
            assert!(key.is_uppercase());
            assert!(members.iter().all(|c| c.name.starts_with(*key)));
        }
    }

    #[test]
    fn sections_and_members_are_alphabetical() {
        let groups = group_by_initial(generate_contacts(180));
        let keys: Vec<char> = groups.keys().copied().collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        for members in groups.values() {
            assert!(members.windows(2).all(|pair| pair[0].name <= pair[1].name));
        }
    }

    #[test]
    fn fifty_contacts_cover_every_leading_letter_of_the_pool_prefix() {
        let expected: BTreeSet<char> = NAME_POOL
            .iter()
            .take(50)
            .map(|name| section_key(name))
            .collect();
        let groups = group_by_initial(generate_contacts(50));
        let keys: BTreeSet<char> = groups.keys().copied().collect();
        assert_eq!(keys, expected);
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn lowercase_names_use_uppercase_key_and_keep_order() {
        let groups = group_by_initial(vec![contact("bob"), contact("Bea"), contact("")]);
        let b: Vec<&str> = groups[&'B'].iter().map(|c| c.name.as_str()).collect();
        assert_eq!(b, vec!["bob", "Bea"]);
        assert_eq!(groups[&FALLBACK_SECTION].len(), 1);
    }
}
