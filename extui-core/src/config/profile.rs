//! Build profile parser
//!
//! A minimal parser for the TOML subset used by build profiles. It does NOT
//! support the full TOML spec.
//!
//! Supported features:
//! - `[section]` headers
//! - `key = value` pairs with boolean or integer values
//! - Comments (`# ...`), including trailing comments
//!
//! Recognized layout:
//!
//! ```toml
//! [features]
//! speaker = false
//! advanced_pause = true
//! power_loss_recovery = true
//! leveling = true
//!
//! [leveling]
//! bed_temp = 60
//! ```

use super::capabilities::Capabilities;
use crate::events::Celsius;

/// Profile parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// Section header not recognized (1-based line number)
    UnknownSection(usize),
    /// Key not recognized in its section
    UnknownKey(usize),
    /// Line is neither a header nor `key = value`
    Syntax(usize),
    /// Value has the wrong type or is out of range
    InvalidValue(usize),
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Features,
    Leveling,
}

/// Parse a build profile into a capability set
///
/// Keys that are absent keep their [`Capabilities::NONE`] value.
pub fn parse_profile(input: &str) -> Result<Capabilities, ProfileError> {
    let mut caps = Capabilities::NONE;
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = match line[1..line.len() - 1].trim() {
                "features" => Section::Features,
                "leveling" => Section::Leveling,
                _ => return Err(ProfileError::UnknownSection(line_no)),
            };
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ProfileError::Syntax(line_no))?;
        apply_value(section, key, value, &mut caps, line_no)?;
    }

    Ok(caps)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_bool(value: &str, line_no: usize) -> Result<bool, ProfileError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ProfileError::InvalidValue(line_no)),
    }
}

fn parse_celsius(value: &str, line_no: usize) -> Result<Celsius, ProfileError> {
    value
        .parse::<Celsius>()
        .map_err(|_| ProfileError::InvalidValue(line_no))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    caps: &mut Capabilities,
    line_no: usize,
) -> Result<(), ProfileError> {
    match section {
        Section::Root => Err(ProfileError::UnknownKey(line_no)),
        Section::Features => {
            let flag = match key {
                "speaker" => &mut caps.speaker,
                "advanced_pause" => &mut caps.advanced_pause,
                "power_loss_recovery" => &mut caps.power_loss_recovery,
                "leveling" => &mut caps.leveling,
                _ => return Err(ProfileError::UnknownKey(line_no)),
            };
            *flag = parse_bool(value, line_no)?;
            Ok(())
        }
        Section::Leveling => match key {
            "bed_temp" => {
                caps.leveling_bed_temp = Some(parse_celsius(value, line_no)?);
                Ok(())
            }
            _ => Err(ProfileError::UnknownKey(line_no)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        assert_eq!(parse_profile(""), Ok(Capabilities::NONE));
        assert_eq!(parse_profile("# nothing here\n\n"), Ok(Capabilities::NONE));
    }

    #[test]
    fn test_full_profile() {
        let input = "\
# Test printer
[features]
speaker = true          # piezo on the mainboard
advanced_pause = true
power_loss_recovery = true
leveling = true

[leveling]
bed_temp = 60
";
        let caps = parse_profile(input).unwrap();
        assert!(caps.speaker);
        assert!(caps.advanced_pause);
        assert!(caps.power_loss_recovery);
        assert!(caps.leveling);
        assert_eq!(caps.leveling_bed_temp, Some(60));
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_profile("[features]\nspeaker = true\n[display]\n"),
            Err(ProfileError::UnknownSection(3))
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_profile("[features]\nlaser = true\n"),
            Err(ProfileError::UnknownKey(2))
        );
        assert_eq!(
            parse_profile("speaker = true\n"),
            Err(ProfileError::UnknownKey(1))
        );
    }

    #[test]
    fn test_only_dispatched_features_are_accepted() {
        // Reserved no-op events carry no flag
        let reserved = [
            "mesh",
            "cold_extrusion_guard",
            "pid_heating",
            "mpc_autotune",
            "firmware_flash",
        ];
        for key in reserved {
            let mut input = heapless::String::<64>::new();
            input.push_str("[features]\n").unwrap();
            input.push_str(key).unwrap();
            input.push_str(" = true\n").unwrap();
            assert_eq!(
                parse_profile(&input),
                Err(ProfileError::UnknownKey(2)),
                "{}",
                key
            );
        }
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_profile("[features]\nspeaker = yes\n"),
            Err(ProfileError::InvalidValue(2))
        );
        assert_eq!(
            parse_profile("[leveling]\nbed_temp = hot\n"),
            Err(ProfileError::InvalidValue(2))
        );
        assert_eq!(
            parse_profile("[leveling]\nbed_temp = 40000\n"),
            Err(ProfileError::InvalidValue(2))
        );
    }

    #[test]
    fn test_syntax_error() {
        assert_eq!(
            parse_profile("[features]\nspeaker\n"),
            Err(ProfileError::Syntax(2))
        );
        assert_eq!(
            parse_profile("[features]\nspeaker =\n"),
            Err(ProfileError::Syntax(2))
        );
    }
}
