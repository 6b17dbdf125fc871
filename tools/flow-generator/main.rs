use clap::Parser;
use rand::{Rng, rngs::ThreadRng};
use screenflow::flow::{ContentItem, ContentKind, FlowDocument};
use screenflow::ui::UiFlow;
use std::fs;

/// Headings mixed into generated content so field names exercise sanitization.
const HEADINGS: [&str; 8] = [
    "What is your name?",
    "Recommend?",
    "E-mail address",
    "Date of birth (dd/mm/yyyy)",
    "How could we do better?",
    "Pick one",
    "¿Qué tal?",
    "",
];

/// A CLI tool to generate random flow builder documents for the screenflow compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of screens to generate
    #[arg(long, default_value_t = 3)]
    screens: usize,

    /// The maximum number of content items per screen
    #[arg(long, default_value_t = 6)]
    max_items: usize,

    /// Also emit content types the compiler does not know
    #[arg(long)]
    with_unsupported: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating a flow with {} screen(s), up to {} item(s) each...",
        cli.screens, cli.max_items
    );

    let mut flow = FlowDocument::default();
    for _ in 0..cli.screens {
        let screen = flow.push_numbered_screen();
        let count = rng.random_range(0..=cli.max_items);
        for _ in 0..count {
            let kind = ContentKind::ALL[rng.random_range(0..ContentKind::ALL.len())];
            screen.push_default_content(kind);
            if let Some(item) = screen.content.last_mut() {
                randomize_item(&mut rng, item);
            }
        }
        if cli.with_unsupported && rng.random_bool(0.5) {
            let id = format!("{}-{}", screen.id, screen.content.len() + 1);
            screen.content.push(ContentItem::Unsupported {
                id,
                heading: "Upload a video".to_string(),
                kind: "video".to_string(),
            });
        }
        println!("-> Generated '{}' with {} item(s).", screen.title, screen.content.len());
    }

    let json_output = serde_json::to_string_pretty(&UiFlow::from(&flow))?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved flow to '{}'", cli.output);

    Ok(())
}

/// Swaps the default heading for a random one and gives selections a random option count.
fn randomize_item(rng: &mut ThreadRng, item: &mut ContentItem) {
    let new_heading = HEADINGS[rng.random_range(0..HEADINGS.len())].to_string();
    match item {
        ContentItem::Selection {
            heading, options, ..
        } => {
            *heading = new_heading;
            let count = rng.random_range(0..=4);
            *options = (1..=count).map(|i| format!("Option {}", i)).collect();
        }
        ContentItem::ShortAnswer { heading, .. }
        | ContentItem::Paragraph { heading, .. }
        | ContentItem::DatePicker { heading, .. } => *heading = new_heading,
        ContentItem::LargeHeading { .. }
        | ContentItem::SmallHeading { .. }
        | ContentItem::Media { .. }
        | ContentItem::Unsupported { .. } => {}
    }
}
