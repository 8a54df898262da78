/// The current user's profile record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

/// Builds avatar initials from the first letters of up to two words.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
