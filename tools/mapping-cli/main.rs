use bunrui::prelude::*;
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindCli {
    Variable,
    Constant,
    Expression,
    Script,
    List,
    Map,
}

impl KindCli {
    fn to_kind(self) -> ParameterKind {
        match self {
            KindCli::Variable => ParameterKind::Variable,
            KindCli::Constant => ParameterKind::ConstantValue,
            KindCli::Expression => ParameterKind::Expression,
            KindCli::Script => ParameterKind::Script,
            KindCli::List => ParameterKind::List,
            KindCli::Map => ParameterKind::Map,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Input,
    Output,
}

impl DirectionCli {
    fn to_direction(self) -> Direction {
        match self {
            DirectionCli::Input => Direction::Input,
            DirectionCli::Output => Direction::Output,
        }
    }
}

/// A classification and validation CLI for io parameter mappings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the element JSON file to inspect
    element_path: Option<String>,
    /// Optional path to an element template JSON file
    template_path: Option<String>,

    /// Which parameter list the report labels are written for
    #[arg(short, long, value_enum, default_value = "input")]
    direction: DirectionCli,

    /// Check a single candidate value instead of inspecting an element
    #[arg(short, long)]
    check: Option<String>,

    /// The kind the candidate value is checked against
    #[arg(short, long, value_enum, default_value = "variable")]
    kind: KindCli,

    /// Use the lenient wrap rule for variable checks
    #[arg(long)]
    lenient: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli.direction.to_direction());
    } else if let Some(value) = &cli.check {
        check_value(
            value,
            cli.kind.to_kind(),
            cli.direction.to_direction(),
            cli.lenient,
        );
    } else {
        run_report(cli);
    }
}

/// Inspects an element file and prints a classification report.
fn run_report(cli: Cli) {
    let direction = cli.direction.to_direction();
    let element_path = cli.element_path.unwrap_or_else(|| {
        exit_with_error("Element path is required in non-interactive mode.");
    });

    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let element = ElementShape::from_file(&element_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load element from '{}': {}",
            element_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Classification ---
    println!("\nInspecting element '{}'", element.id);
    println!(
        "  -> io mapping supported: {}",
        element.supports_io_mapping(false)
    );
    println!(
        "  -> output parameters supported: {}",
        element.supports_output_parameters(false)
    );

    let classify_start = Instant::now();
    let parameters = match direction {
        Direction::Input => element.input_parameters(false),
        Direction::Output => element.output_parameters(false),
    };

    println!("\nParameters ({})", parameters.len());
    for parameter in parameters {
        let kind = classify(parameter.value.as_deref(), parameter.definition.as_ref(), None);
        println!("  -> '{}' [{}]", parameter.name, kind.label(direction));
        if let Some(diagnostic) = validate_parameter_name(&parameter.name) {
            println!("     name: {}", diagnostic);
        }
    }

    let histogram = parameters
        .iter()
        .map(|parameter| {
            classify(parameter.value.as_deref(), parameter.definition.as_ref(), None)
        })
        .counts();
    let classify_duration = classify_start.elapsed();

    // --- 3. Template Bindings ---
    let template_duration = if let Some(template_path) = &cli.template_path {
        let template_start = Instant::now();
        let content = fs::read_to_string(template_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read template file '{}': {}",
                template_path, e
            ))
        });
        let template: ElementTemplate = serde_json::from_str(&content).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to parse template '{}': {}", template_path, e))
        });

        println!("\nTemplate bindings");
        for property in template.input_parameter_properties() {
            let label = property
                .label
                .as_deref()
                .or(property.binding.name.as_deref())
                .unwrap_or("<unnamed>");
            let value = property_value(&element, property).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read property '{}': {}", label, e))
            });
            println!("  -> {}: '{}'", label, value);

            if let Some(constraints) = &property.constraints {
                match validate_constraints(&value, constraints) {
                    Ok(None) => println!("     constraints: ok"),
                    Ok(Some(violation)) => println!("     constraints: {}", violation),
                    Err(e) => exit_with_error(&format!(
                        "Template defect on property '{}': {}",
                        label, e
                    )),
                }
            }
        }
        Some(template_start.elapsed())
    } else {
        None
    };

    // --- 4. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Kind Summary ---");
    for kind in ParameterKind::ALL {
        if let Some(count) = histogram.get(&kind) {
            println!("{:<16} {}", kind.label(direction), count);
        }
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading:         {:?}", load_duration);
    println!("Classification:       {:?}", classify_duration);
    if let Some(template_duration) = template_duration {
        println!("Template Bindings:    {:?}", template_duration);
    }
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_duration);
    println!();
}

/// Checks one candidate value against a kind's rules and prints the
/// outcome the way an editor would surface it.
fn check_value(value: &str, kind: ParameterKind, direction: Direction, lenient: bool) {
    println!(
        "Checking '{}' against kind '{}' ({})",
        value,
        kind,
        kind.label(direction)
    );

    if lenient && kind == ParameterKind::Variable {
        match validate_variable_expression_with(value, WrapRule::Lenient) {
            Some(diagnostic) => println!("  -> {}", diagnostic),
            None => println!("  -> valid under the lenient wrap rule"),
        }
        return;
    }

    let mut factory = NodeFactory::new();
    let parameter = factory.parameter("scratch");
    let mut session = EditSession::new(direction);
    session.select(Some(&parameter));
    session.choose_type(&parameter, kind, &mut factory);

    match session.type_value(&parameter, value) {
        EditOutcome::Applied(_) => println!("  -> valid {}", kind),
        EditOutcome::Rejected(rejected) => println!("  -> {}", rejected.message),
        EditOutcome::Stashed => println!(
            "  -> '{}' has no value rules; the value is kept for a later kind switch",
            kind.label(direction)
        ),
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(direction: Direction) {
    println!("--- Bunrui Interactive Mode ---");
    println!("Empty input exits.\n");

    loop {
        let value = prompt_for_input("Enter a value to check", None);
        if value.is_empty() {
            break;
        }

        let kind = loop {
            println!("\nPlease select the kind to check against:");
            for (position, option) in kind_options(direction).iter().enumerate() {
                println!("  {}: {}", position + 1, option.label);
            }
            let choice = prompt_for_input("Enter choice", Some("1"));

            match choice.trim().parse::<usize>() {
                Ok(index) if (1..=ParameterKind::ALL.len()).contains(&index) => {
                    break ParameterKind::ALL[index - 1];
                }
                _ => println!("Invalid choice. Please enter 1 to 6."),
            }
        };

        check_value(&value, kind, direction, false);
        println!();
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
