use std::{error::Error,
          fs::{self, File},
          io::{self, BufWriter, Write},
          path::PathBuf};
use clap::Parser;
use palette_diagram::{Diagram, Palette, load, palettes};

type Err = Box<dyn Error>;

/// Write the luminance diagram of palettes as SVG files.
///
/// Without palette files, the diagrams of all built-in palettes are
/// written.  Each written file path is printed.
#[derive(Parser)]
#[command(name = "palette-diagram", version)]
struct Cli {
    /// Palette documents (HJSON or JSON)
    palettes: Vec<PathBuf>,

    /// Directory receiving the `<palette name>.svg` files
    #[arg(short, long, default_value = "output/svg")]
    out_dir: PathBuf,

    /// Write the diagram to the standard output instead (requires
    /// exactly one palette file)
    #[arg(long)]
    stdout: bool,

    /// Width of the canvas
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Height of the canvas (length of the luminance axis)
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Side of the color squares
    #[arg(long, default_value_t = 48)]
    square_size: u32,

    #[arg(long, default_value_t = 3)]
    line_width: u32,

    #[arg(long, default_value_t = 125)]
    margin: u32,

    /// Shift text for renderers ignoring `dominant-baseline`
    #[arg(long)]
    adjust_alignment: bool,
}

impl Cli {
    fn diagram(&self) -> Diagram {
        Diagram::new()
            .width(self.width)
            .height(self.height)
            .square_size(self.square_size)
            .line_width(self.line_width)
            .margin(self.margin)
            .adjust_alignment(self.adjust_alignment)
    }

    fn palettes(&self) -> Result<Vec<Palette>, Err> {
        if self.stdout && self.palettes.len() != 1 {
            return Err("--stdout writes a single SVG document: \
                        give exactly one palette file".into())
        }
        if self.palettes.is_empty() {
            return Ok(palettes::all().cloned().collect())
        }
        let mut v = Vec::with_capacity(self.palettes.len());
        for path in &self.palettes { v.push(load::from_path(path)?) }
        Ok(v)
    }
}

fn main() -> Result<(), Err> {
    let cli = Cli::parse();
    let diagram = cli.diagram();
    let palettes = cli.palettes()?;
    if cli.stdout {
        let mut out = io::stdout().lock();
        diagram.write(&palettes[0], &mut out)?;
        out.flush()?;
        return Ok(())
    }
    fs::create_dir_all(&cli.out_dir)?;
    for p in &palettes {
        let path = cli.out_dir.join(format!("{}.svg", p.name()));
        // Render in memory so that a failure leaves no partial file.
        let svg = diagram.to_svg(p)?;
        let mut fh = BufWriter::new(File::create(&path)?);
        fh.write_all(svg.as_bytes())?;
        fh.flush()?;
        println!("{}", path.display());
    }
    Ok(())
}
