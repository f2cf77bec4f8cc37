use bunrui::prelude::*;
use std::env;
use std::fs;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/element.json> [path/to/template.json]");
        std::process::exit(1);
    }

    let element_path = &args[1];
    let template_path = args.get(2);

    println!("Loading element from: {}", element_path);
    let element = match ElementShape::from_file(element_path) {
        Ok(element) => element,
        Err(e) => {
            eprintln!("Failed to load element from '{}': {}", element_path, e);
            std::process::exit(1);
        }
    };

    println!("\nInspecting element '{}'", element.id);
    println!(
        "  -> io mapping supported: {}",
        element.supports_io_mapping(false)
    );
    println!(
        "  -> output parameters supported: {}",
        element.supports_output_parameters(false)
    );

    report_parameters(
        "Input parameters",
        element.input_parameters(false),
        Direction::Input,
    );
    report_parameters(
        "Output parameters",
        element.output_parameters(false),
        Direction::Output,
    );

    // Template phase
    if let Some(template_path) = template_path {
        println!("\nLoading template from: {}", template_path);
        let content = match fs::read_to_string(template_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to read template file '{}': {}", template_path, e);
                std::process::exit(1);
            }
        };
        let template: ElementTemplate = match serde_json::from_str(&content) {
            Ok(template) => template,
            Err(e) => {
                eprintln!("Failed to parse template '{}': {}", template_path, e);
                std::process::exit(1);
            }
        };

        report_template(&element, &template);
    }
    println!();
}

fn report_parameters(heading: &str, parameters: &[Parameter], direction: Direction) {
    println!("\n{} ({})", heading, parameters.len());
    for parameter in parameters {
        let kind = classify(parameter.value.as_deref(), parameter.definition.as_ref(), None);
        println!("  -> '{}' [{}]", parameter.name, kind.label(direction));

        if let Some(diagnostic) = validate_parameter_name(&parameter.name) {
            println!("     name: {}", diagnostic);
        }

        match &parameter.definition {
            Some(Definition::Script { script_format, .. }) => {
                println!("     script format: '{}'", script_format);
            }
            Some(Definition::List { items, .. }) => {
                println!("     {} item(s)", items.len());
            }
            Some(Definition::Map { entries, .. }) => {
                println!("     {} entry(ies)", entries.len());
            }
            None => match parameter.value.as_deref() {
                Some(value) => println!("     value: '{}'", value),
                None => println!("     value: <empty>"),
            },
        }
    }
}

fn report_template(element: &ElementShape, template: &ElementTemplate) {
    let properties = template.input_parameter_properties();
    println!(
        "Template '{}' binds {} input parameter(s)",
        template.id,
        properties.len()
    );

    for property in properties {
        let label = property
            .label
            .as_deref()
            .or(property.binding.name.as_deref())
            .unwrap_or("<unnamed>");

        let value = match property_value(element, property) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to read property '{}': {}", label, e);
                std::process::exit(1);
            }
        };
        println!("  -> {}: '{}'", label, value);

        if let Some(constraints) = &property.constraints {
            match validate_constraints(&value, constraints) {
                Ok(None) => println!("     constraints: ok"),
                Ok(Some(violation)) => println!("     constraints: {}", violation),
                Err(e) => {
                    eprintln!("Template defect on property '{}': {}", label, e);
                    std::process::exit(1);
                }
            }
        }
    }
}
