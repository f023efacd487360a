// Ergoswe CLI
// Inspect the Swedish-layout translation tables and keymap helpers from the shell

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use ergoswe_core::{
    highest_layer, keycode_name, translate, CustomKeycode, KeyEvent, Layer, LedState, Layout,
    RecordingSink, Settings, ASCII_RANGE, COMBOS, KEY_OVERRIDES,
};

/// ASCII to Swedish-layout key translation
#[derive(Parser, Debug)]
#[command(name = "ergoswe")]
#[command(version)]
#[command(about = "ASCII to Swedish-layout key translation", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/ergoswe/settings.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Layout variant, overrides the settings file
    #[arg(short, long, value_name = "VARIANT", global = true)]
    layout: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the key events that type TEXT
    Translate {
        text: String,
    },
    /// Dump the character table of the layout
    Table {
        /// Include characters with no key
        #[arg(long)]
        all: bool,
    },
    /// Show the indicator LEDs for a layer bitmask
    Led {
        /// Layer state, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_layer_state)]
        layer_state: u32,
    },
    /// List combos, custom keycodes and key overrides
    Combos,
    /// Validate the settings file and exit
    CheckConfig {
        /// Print a default settings file instead
        #[arg(long)]
        print_default: bool,
    },
}

fn parse_layer_state(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid layer state '{}': {}", s, e))
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };

    if let Some(name) = &args.layout {
        let layout: Layout = name.parse().with_context(|| {
            let known: Vec<_> = Layout::iter().map(Layout::as_str).collect();
            format!("unknown layout '{}', expected one of: {}", name, known.join(", "))
        })?;
        settings.set_layout(layout);
    }

    log::debug!("using layout {}", settings.layout());
    Ok(settings)
}

fn describe_char(code: u32) -> String {
    match char::from_u32(code) {
        Some(c) if !c.is_control() => format!("{:?}", c),
        _ => format!("0x{:02x}", code),
    }
}

fn cmd_translate(settings: &Settings, text: &str) -> Result<()> {
    let sender = settings.send_string();
    let tables = sender.tables();

    for c in text.chars() {
        match translate(tables, c as u32) {
            Ok(action) => println!(
                "{:>6}  {:<24} {}",
                describe_char(c as u32),
                action.to_string(),
                action.requirement()
            ),
            Err(e) => println!("{:>6}  {}", describe_char(c as u32), e),
        }
    }

    let mut sink = RecordingSink::new();
    let report = sender
        .send(text, &mut sink)
        .context("text cannot be typed on this layout")?;

    let events: Vec<String> = sink.events().iter().map(KeyEvent::to_string).collect();
    println!();
    println!("{}", events.join(" "));
    println!(
        "sent {}, skipped {}, substituted {}",
        report.sent, report.skipped, report.substituted
    );
    Ok(())
}

fn cmd_table(settings: &Settings, all: bool) {
    let layout = settings.layout();
    let tables = layout.tables();
    println!("# {}", layout);

    for code in 0..ASCII_RANGE as u32 {
        match translate(tables, code) {
            Ok(action) => println!(
                "{:>3}  {:>6}  {:<8} {:<6} shift={} altgr={} dead={}",
                code,
                describe_char(code),
                keycode_name(action.key().code()),
                action.requirement().to_string(),
                u8::from(action.needs_shift()),
                u8::from(action.needs_altgr()),
                u8::from(action.is_dead_key()),
            ),
            Err(_) if all => println!("{:>3}  {:>6}  -", code, describe_char(code)),
            Err(_) => {}
        }
    }
}

fn cmd_led(layer_state: u32) {
    let index = highest_layer(layer_state);
    let name = Layer::from_index(index)
        .map(|layer| layer.to_string())
        .unwrap_or_else(|| format!("layer {}", index));
    println!("{}: {}", name, LedState::for_layer_state(layer_state));
}

fn cmd_combos(settings: &Settings) {
    let layout = settings.layout();

    println!("Combos:");
    for combo in COMBOS {
        match combo.resolve(layout) {
            Ok(action) => println!("  {:<12} {:<22} {}", combo.name, combo.to_string(), action),
            Err(e) => println!("  {:<12} {:<22} {}", combo.name, combo.to_string(), e),
        }
    }

    println!("Custom keycodes:");
    for keycode in CustomKeycode::iter() {
        println!("  {:<12} {:?}", keycode.name(), keycode.text());
    }

    println!("Key overrides:");
    for o in KEY_OVERRIDES {
        println!("  {}+{} -> {}", o.trigger_mods, o.trigger, o.replacement);
    }
}

fn cmd_check_config(settings: &Settings) {
    match settings.source_path() {
        Some(path) => println!("Settings: {}", path.display()),
        None => println!("Settings: defaults"),
    }
    println!("  layout:             {}", settings.layout());
    println!("  on unmapped:        {:?}", settings.unmapped_policy());
    println!("  dead key follow-up: {:?}", settings.dead_key_follow_up());

    let terms = settings.tapping_terms();
    println!("  tapping term:       {} ms", terms.base().as_millis());
    for (key, term) in terms.overrides() {
        println!("    {:<16} {} ms", key.to_string(), term.as_millis());
    }
    println!("Configuration is valid");
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Command::CheckConfig { print_default: true } = &args.command {
        print!("{}", ergoswe_core::default_settings_content());
        return Ok(());
    }

    let settings = load_settings(&args)?;

    match &args.command {
        Command::Translate { text } => cmd_translate(&settings, text)?,
        Command::Table { all } => cmd_table(&settings, *all),
        Command::Led { layer_state } => cmd_led(*layer_state),
        Command::Combos => cmd_combos(&settings),
        Command::CheckConfig { .. } => cmd_check_config(&settings),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layer_state() {
        assert_eq!(parse_layer_state("16"), Ok(16));
        assert_eq!(parse_layer_state("0x10"), Ok(16));
        assert!(parse_layer_state("sixteen").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["ergoswe", "--layout", "swedish-mac-iso", "translate", "a<b"])
                .unwrap();
        assert_eq!(args.layout.as_deref(), Some("swedish-mac-iso"));
        assert!(matches!(args.command, Command::Translate { ref text } if text == "a<b"));

        let args = Args::try_parse_from(["ergoswe", "led", "0x3", "-v"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Led { layer_state: 3 }));
    }

    #[test]
    fn test_describe_char() {
        assert_eq!(describe_char('a' as u32), "'a'");
        assert_eq!(describe_char(0x0a), "0x0a");
    }
}
