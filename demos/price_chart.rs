use gbmchart::prelude::*;

fn main() -> Result<()> {
    let params = SimulationParameters::new(0.02, 0.001, 100.0, 252, 5);
    let mut session = ChartSession::new(GbmModel::new(), params);
    session.set_line_color(palette_color("Blue")?);
    session.run()?;

    let mut surface = SvgSurface::new(800.0, 450.0);
    session.draw(800.0, 450.0, &mut surface);

    let out = std::path::PathBuf::from("target/out/price_chart.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, surface.finish())?;
    println!("Wrote {}", out.display());
    Ok(())
}
