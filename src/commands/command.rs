//! Parsing a line of user input into a [`Command`].

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// A recognized command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <old phone> <new phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>`
    Phone { name: String },
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `delete <name>`
    Delete { name: String },
    /// `remove-phone <name> <phone>`
    RemovePhone { name: String, phone: String },
    /// `close` or `exit`
    Exit,
}

/// Destructure `args` into exactly `N` words.
fn arity<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::InvalidInput)
}

impl FromStr for Command {
    type Err = CommandError;

    /// The first word is the case-insensitive keyword, the rest are arguments.
    ///
    /// Unknown keywords (and blank input) yield `CommandError::InvalidCommand`;
    /// a known keyword with the wrong number of arguments yields
    /// `CommandError::InvalidInput`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words
            .next()
            .ok_or(CommandError::InvalidCommand)?
            .to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "hello" => {
                arity::<0>(&args)?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = arity::<2>(&args)?;
                Command::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }
            }
            "change" => {
                let [name, old_phone, new_phone] = arity::<3>(&args)?;
                Command::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                }
            }
            "phone" => {
                let [name] = arity::<1>(&args)?;
                Command::Phone {
                    name: name.to_string(),
                }
            }
            "all" => {
                arity::<0>(&args)?;
                Command::All
            }
            "add-birthday" => {
                let [name, birthday] = arity::<2>(&args)?;
                Command::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                }
            }
            "show-birthday" => {
                let [name] = arity::<1>(&args)?;
                Command::ShowBirthday {
                    name: name.to_string(),
                }
            }
            "birthdays" => {
                arity::<0>(&args)?;
                Command::Birthdays
            }
            "delete" => {
                let [name] = arity::<1>(&args)?;
                Command::Delete {
                    name: name.to_string(),
                }
            }
            "remove-phone" => {
                let [name, phone] = arity::<2>(&args)?;
                Command::RemovePhone {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::InvalidCommand),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_case_insensitive() {
        assert_eq!("HELLO".parse::<Command>(), Ok(Command::Hello));
        assert_eq!("Exit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_arguments_keep_case() {
        assert_eq!(
            "ADD Alice 1234567890".parse::<Command>(),
            Ok(Command::Add {
                name: "Alice".to_string(),
                phone: "1234567890".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        assert_eq!(
            "  change   Bob 1111111111\t2222222222  ".parse::<Command>(),
            Ok(Command::Change {
                name: "Bob".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "2222222222".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_hyphenated_commands() {
        assert_eq!(
            "add-birthday Carl 15.03.2020".parse::<Command>(),
            Ok(Command::AddBirthday {
                name: "Carl".to_string(),
                birthday: "15.03.2020".to_string(),
            })
        );
        assert_eq!(
            "show-birthday Carl".parse::<Command>(),
            Ok(Command::ShowBirthday {
                name: "Carl".to_string()
            })
        );
        assert_eq!(
            "remove-phone Carl 1234567890".parse::<Command>(),
            Ok(Command::RemovePhone {
                name: "Carl".to_string(),
                phone: "1234567890".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            "fly me to the moon".parse::<Command>(),
            Err(CommandError::InvalidCommand)
        );
        assert_eq!("".parse::<Command>(), Err(CommandError::InvalidCommand));
        assert_eq!("   ".parse::<Command>(), Err(CommandError::InvalidCommand));
    }

    #[test]
    fn test_parse_wrong_arity() {
        for line in [
            "add Alice",
            "add Alice 1234567890 extra",
            "change Bob 1111111111",
            "phone",
            "add-birthday Carl",
            "show-birthday",
            "hello there",
            "all of them",
            "birthdays soon",
            "delete",
            "remove-phone Carl",
        ] {
            assert_eq!(
                line.parse::<Command>(),
                Err(CommandError::InvalidInput),
                "line: {line}"
            );
        }
    }
}
