use std::io::{self, Write};
use std::process::ExitCode;

use strategy_sort::{sort, Algorithm, Record, SortKey};

/// Interactive front end: the records live here, the library only ever sees
/// them for the duration of one sort call.
fn main() -> ExitCode {
    let mut records = vec![
        Record::new("Ahmed", 3),
        Record::new("Mohamed", 1),
        Record::new("Ali", 2),
    ];

    loop {
        let Some(choice) =
            read_choice("Choose sorting algorithm (1 >> Insertion Sort, 2 >> Selection Sort): ")
        else {
            println!("Invalid choice. Exiting.");
            return ExitCode::FAILURE;
        };
        let algorithm = match Algorithm::try_from(choice) {
            Ok(algorithm) => algorithm,
            Err(err) => {
                println!("{err}. Exiting.");
                return ExitCode::FAILURE;
            }
        };

        let Some(choice) = read_choice("Choose sorting criteria (1 for Name, 2 for ID): ") else {
            println!("Invalid choice. Exiting.");
            return ExitCode::FAILURE;
        };
        let key = match SortKey::try_from(choice) {
            Ok(key) => key,
            Err(err) => {
                println!("{err}. Exiting.");
                return ExitCode::FAILURE;
            }
        };

        sort(&mut records, algorithm, key);

        println!("Sorted records:");
        for record in &records {
            println!("{record}");
        }
    }
}

/// Prompts on stdout and reads one line. `None` when the line is not a
/// number, including end of input.
fn read_choice(prompt: &str) -> Option<u32> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    line.trim().parse().ok()
}
