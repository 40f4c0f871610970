//! PNG choropleth output. Thin boundary over plotters: the caller supplies
//! geometry, one category label per region, and an ordered legend; nothing
//! here computes statistics.

mod color;

use std::fmt::Display;
use std::path::Path;

use anyhow::{anyhow, ensure, Result};
use geo::{Coord, MultiPolygon};
use log::info;
use plotters::prelude::*;

pub(crate) use color::{diverging_color, party_color, sign_color, MISSING};

const MAP_WIDTH: i32 = 900;
const LEGEND_WIDTH: i32 = 300;
const MARGIN: i32 = 20;
const TITLE_BAND: i32 = 50;
const OUTLINE: RGBColor = RGBColor(90, 90, 90);

/// Draw a categorical choropleth and write it to `path`.
///
/// `categories[i]` labels `geoms[i]`; regions labeled `None` are drawn as
/// outlines only (filtered out of the analysis, not "no data"). Labels
/// missing from `legend` fall back to the no-data fill so a bad join shows
/// up on the map instead of vanishing.
pub(crate) fn render_categorical(
    path: &Path,
    title: &str,
    legend_title: &str,
    geoms: &[MultiPolygon<f64>],
    categories: &[Option<&str>],
    legend: &[(&str, RGBColor)],
) -> Result<()> {
    ensure!(
        categories.len() == geoms.len(),
        "length mismatch: {} categories for {} geometries",
        categories.len(),
        geoms.len()
    );

    let bounds = Bounds::of(geoms).ok_or_else(|| anyhow!("nothing to draw: empty geometry"))?;

    // Lon/lat -> pixel, preserving aspect ratio, Y down, title band on top.
    let scale = (MAP_WIDTH - 2 * MARGIN) as f64 / bounds.width();
    let map_height = (bounds.height() * scale).ceil() as i32;
    let width = (MAP_WIDTH + LEGEND_WIDTH) as u32;
    let height = (map_height + 2 * MARGIN + TITLE_BAND) as u32;
    let project = move |coord: &Coord<f64>| -> (i32, i32) {
        let x = MARGIN as f64 + (coord.x - bounds.min_x) * scale;
        let y = TITLE_BAND as f64 + MARGIN as f64 + (bounds.max_y - coord.y) * scale;
        (x.round() as i32, y.round() as i32)
    };

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    for (geom, category) in geoms.iter().zip(categories) {
        let fill = category.map(|label| {
            legend
                .iter()
                .find(|(name, _)| *name == label)
                .map(|(_, color)| *color)
                .unwrap_or(MISSING)
        });
        draw_region(&root, geom, fill, &project)?;
    }

    draw_title(&root, title)?;
    draw_legend(&root, legend_title, legend)?;

    root.present().map_err(plot_err)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Plotters error types are backend-parameterized; flatten them for anyhow.
fn plot_err(e: impl Display) -> anyhow::Error {
    anyhow!("plotting failed: {e}")
}

#[derive(Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn of(geoms: &[MultiPolygon<f64>]) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for geom in geoms {
            for polygon in &geom.0 {
                for coord in &polygon.exterior().0 {
                    let b = bounds.get_or_insert(Bounds {
                        min_x: coord.x,
                        min_y: coord.y,
                        max_x: coord.x,
                        max_y: coord.y,
                    });
                    b.min_x = b.min_x.min(coord.x);
                    b.min_y = b.min_y.min(coord.y);
                    b.max_x = b.max_x.max(coord.x);
                    b.max_y = b.max_y.max(coord.y);
                }
            }
        }
        bounds.filter(|b| b.width() > 0.0 && b.height() > 0.0)
    }

    #[inline] fn width(&self) -> f64 { self.max_x - self.min_x }
    #[inline] fn height(&self) -> f64 { self.max_y - self.min_y }
}

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn draw_region(
    root: &Canvas,
    geom: &MultiPolygon<f64>,
    fill: Option<RGBColor>,
    project: &impl Fn(&Coord<f64>) -> (i32, i32),
) -> Result<()> {
    for polygon in &geom.0 {
        let exterior: Vec<(i32, i32)> = polygon.exterior().0.iter().map(project).collect();
        if let Some(color) = fill {
            root.draw(&Polygon::new(exterior.clone(), color)).map_err(plot_err)?;
            // Plotters polygons have no hole support; repaint interiors.
            for interior in polygon.interiors() {
                let hole: Vec<(i32, i32)> = interior.0.iter().map(project).collect();
                root.draw(&Polygon::new(hole, WHITE)).map_err(plot_err)?;
            }
        }
        root.draw(&PathElement::new(exterior, OUTLINE)).map_err(plot_err)?;
        for interior in polygon.interiors() {
            let hole: Vec<(i32, i32)> = interior.0.iter().map(project).collect();
            root.draw(&PathElement::new(hole, OUTLINE)).map_err(plot_err)?;
        }
    }
    Ok(())
}

fn draw_title(root: &Canvas, title: &str) -> Result<()> {
    let style = TextStyle::from(("sans-serif", 28).into_font()).color(&BLACK);
    root.draw_text(title, &style, (MARGIN, 14)).map_err(plot_err)
}

fn draw_legend(root: &Canvas, legend_title: &str, legend: &[(&str, RGBColor)]) -> Result<()> {
    let x = MAP_WIDTH + 10;
    let title_style = TextStyle::from(("sans-serif", 20).into_font()).color(&BLACK);
    let label_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);

    root.draw_text(legend_title, &title_style, (x, TITLE_BAND)).map_err(plot_err)?;
    for (i, (label, color)) in legend.iter().enumerate() {
        let y = TITLE_BAND + 30 + i as i32 * 24;
        root.draw(&Rectangle::new(
            [(x, y), (x + 18, y + 18)],
            color.filled(),
        ))
        .map_err(plot_err)?;
        root.draw(&Rectangle::new([(x, y), (x + 18, y + 18)], OUTLINE)).map_err(plot_err)?;
        root.draw_text(label, &label_style, (x + 26, y + 2)).map_err(plot_err)?;
    }
    Ok(())
}
