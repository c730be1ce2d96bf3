use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gang_impose::{
    ArtworkPage, Dimension, FlatSheetConfig, ImpositionResult, Margins, PaperSize, ProductionMode,
    Rotation, RollConfig, SubstrateConfig,
};

#[derive(Parser)]
#[command(name = "gangi", about = "Gang-run imposition planner", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a gang run on a flat sheet
    Flat {
        /// Standard sheet size
        #[arg(long, value_enum, conflicts_with_all = ["sheet_width", "sheet_height"])]
        paper: Option<PaperArg>,

        /// Custom sheet width in mm
        #[arg(long, requires = "sheet_height")]
        sheet_width: Option<f32>,

        /// Custom sheet height in mm
        #[arg(long, requires = "sheet_width")]
        sheet_height: Option<f32>,

        #[command(flatten)]
        artwork: ArtworkArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Plan a gang run on roll material
    Roll {
        /// Roll width in mm
        #[arg(long)]
        roll_width: f32,

        /// Minimum length of material to fill, in mm
        #[arg(long)]
        min_length: f32,

        #[command(flatten)]
        artwork: ArtworkArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Plan from a saved substrate configuration (JSON)
    FromConfig {
        /// Substrate configuration file
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        artwork: ArtworkArgs,
    },
}

#[derive(clap::Args)]
struct ArtworkArgs {
    /// Artwork width in mm (bleed included)
    #[arg(long)]
    width: f32,

    /// Artwork height in mm (bleed included)
    #[arg(long)]
    height: f32,

    /// Page rotation declared by the source document, in degrees
    #[arg(long, default_value = "0", value_enum)]
    source_rotation: RotationArg,
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Margin in mm (uniform on all sides)
    #[arg(long, default_value = "5.0")]
    margin: f32,

    /// Force this many rows (requires --cols)
    #[arg(long, requires = "cols")]
    rows: Option<u32>,

    /// Force this many columns (requires --rows)
    #[arg(long, requires = "rows")]
    cols: Option<u32>,

    /// Duplicate (two-up) production: require an even column count
    #[arg(long)]
    duplicate: bool,

    /// Save the substrate configuration to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A2,
    A3,
    A4,
    Sra3,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum RotationArg {
    #[value(name = "0")]
    None,
    #[value(name = "90")]
    Clockwise90,
    #[value(name = "180")]
    Clockwise180,
    #[value(name = "270")]
    Clockwise270,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A2 => Self::A2,
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::Sra3 => Self::SRA3,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<RotationArg> for Rotation {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::None => Self::None,
            RotationArg::Clockwise90 => Self::Clockwise90,
            RotationArg::Clockwise180 => Self::Clockwise180,
            RotationArg::Clockwise270 => Self::Clockwise270,
        }
    }
}

impl ArtworkArgs {
    fn page(&self) -> Result<ArtworkPage> {
        let page = ArtworkPage::new(self.width, self.height)?
            .with_rotation(self.source_rotation.into());
        Ok(page)
    }
}

impl CommonArgs {
    fn mode(&self) -> ProductionMode {
        if self.duplicate {
            ProductionMode::Duplicate
        } else {
            ProductionMode::Standard
        }
    }
}

fn print_result(result: &ImpositionResult) {
    if !result.success {
        println!("Planning failed:");
        if let Some(message) = &result.error_message {
            println!("  {}", message);
        }
        return;
    }

    println!("Imposition plan:");
    println!("  Rows: {}", result.rows);
    println!("  Columns: {}", result.columns);
    println!("  Quantity: {}", result.quantity);
    println!("  Rotation: {}\u{b0}", result.rotation.degrees());
    println!("  Utilization: {:.1}%", result.utilization_percent);
    println!("  {}", result.description);
}

async fn run(config: SubstrateConfig, artwork: &ArtworkArgs, save_config: Option<&PathBuf>) -> Result<()> {
    config.validate()?;

    if let Some(path) = save_config {
        config.save(path).await?;
        println!("Saved config → {}", path.display());
    }

    let result = gang_impose::plan(&config, &artwork.page()?);
    print_result(&result);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Flat {
            paper,
            sheet_width,
            sheet_height,
            artwork,
            common,
        } => {
            let (width_mm, height_mm) = match (paper, sheet_width, sheet_height) {
                (Some(paper), _, _) => PaperSize::from(paper).dimensions_mm(),
                (None, Some(width), Some(height)) => (width, height),
                _ => bail!("Specify --paper or both --sheet-width and --sheet-height"),
            };

            let mut sheet = FlatSheetConfig::new(Dimension::new(width_mm, height_mm)?);
            sheet.margins = Margins::uniform(common.margin);
            sheet.forced_rows = common.rows;
            sheet.forced_columns = common.cols;
            sheet.mode = common.mode();

            run(
                SubstrateConfig::FlatSheet(sheet),
                &artwork,
                common.save_config.as_ref(),
            )
            .await?;
        }

        Commands::Roll {
            roll_width,
            min_length,
            artwork,
            common,
        } => {
            let mut roll = RollConfig::new(roll_width, min_length);
            roll.margins = Margins::uniform(common.margin);
            roll.forced_rows = common.rows;
            roll.forced_columns = common.cols;
            roll.mode = common.mode();

            run(
                SubstrateConfig::Roll(roll),
                &artwork,
                common.save_config.as_ref(),
            )
            .await?;
        }

        Commands::FromConfig { config, artwork } => {
            let config = SubstrateConfig::load(&config).await?;
            run(config, &artwork, None).await?;
        }
    }

    Ok(())
}
