/// The fixed symbolic-name to value mapping of the language.
///
/// The original defines exactly two constants, both single non-ASCII
/// characters, with these truncated values.
pub const CONSTANTS: &[(&str, f64)] = &[("π", 3.141_592_65), ("ë", 2.718_281_82)];

/// Looks up a named constant.
///
/// # Example
/// ```
/// use bhask::interpreter::constants::lookup;
///
/// assert_eq!(lookup("π"), Some(3.14159265));
/// assert_eq!(lookup("x"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(symbol, _)| *symbol == name)
             .map(|(_, value)| *value)
}
