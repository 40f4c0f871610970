//! Analysis façade: sequences load, join, classify and render for each map,
//! and owns the session's accumulated standings.

mod report;
mod standings;

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use plotters::style::RGBColor;
use polars::prelude::*;

use crate::classify::{BucketScale, IncreaseSign};
use crate::fs::{ensure_dir_exists, require_file_exists};
use crate::map::RegionLayer;
use crate::render;
use crate::table::{read_increase_table, read_support_table, INCREASE_COLUMN};
use crate::types::{Party, Placement};

pub use report::PlacementReport;
pub use standings::Standings;

/// One mapping session over a fixed set of input files.
///
/// Geometry loads once; the statistic tables are read fresh per analysis
/// call. The standings accumulate across calls: the winner computation
/// creates them, later placement computations extend them, and
/// placement-dependent reports fail clearly when their column is absent.
pub struct Atlas {
    layer: RegionLayer,
    support_path: PathBuf,
    increase_path: PathBuf,
    out_dir: PathBuf,
    standings: Option<Standings>,
}

impl Atlas {
    pub fn open(
        shapes: &Path,
        support: &Path,
        increase: &Path,
        out_dir: &Path,
    ) -> Result<Self> {
        require_file_exists(shapes)?;
        require_file_exists(support)?;
        require_file_exists(increase)?;
        ensure_dir_exists(out_dir)?;

        Ok(Self {
            layer: RegionLayer::from_shapefile(shapes)?,
            support_path: support.to_path_buf(),
            increase_path: increase.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
            standings: None,
        })
    }

    /// Choropleth of one party's vote share, bucketed into the 12-label
    /// support scale.
    pub fn support_map(&self, party: Party) -> Result<PathBuf> {
        let support = read_support_table(&self.support_path)?;
        let shares = self.layer.join_column(&support, party.column())?;
        self.bucket_map(
            &shares,
            &BucketScale::support(),
            &format!("Mapa poparcia politycznego dla {party}, 2023"),
            &format!("Poparcie ({party}) w %"),
            &format!("poparcie_{}.png", party.column()),
        )
    }

    /// Choropleth of the natural-increase rate, bucketed into the 20-label
    /// increase scale.
    pub fn increase_map(&self) -> Result<PathBuf> {
        let increase = read_increase_table(&self.increase_path)?;
        let rates = self.layer.join_column(&increase, INCREASE_COLUMN)?;
        self.bucket_map(
            &rates,
            &BucketScale::natural_increase(),
            "Mapa przyrostu naturalnego w powiatach, rok 2023",
            "Przyrost na 1000 mieszkańców",
            "przyrost.png",
        )
    }

    /// Map of the winning party per powiat; creates the session standings.
    pub fn winner_map(&mut self) -> Result<PathBuf> {
        let support = read_support_table(&self.support_path)?;
        match &mut self.standings {
            Some(standings) => standings.compute(&support, Placement::First)?,
            None => self.standings = Some(Standings::from_support(&support)?),
        }
        self.placement_map(
            Placement::First,
            "Mapa zwycięskich partii w powiatach, 2023",
            "Wygrana partia",
            "wygrana_partia.png",
        )
    }

    /// Map of the runner-up party per powiat. Requires the winner
    /// computation to have created the standings first.
    pub fn second_map(&mut self) -> Result<PathBuf> {
        let support = read_support_table(&self.support_path)?;
        self.standings_mut()?.compute(&support, Placement::Second)?;
        self.placement_map(
            Placement::Second,
            "Mapa drugiej partii w powiatach, 2023",
            "Druga partia",
            "druga_partia.png",
        )
    }

    /// Map of the third-place party per powiat. Requires the winner
    /// computation to have created the standings first.
    pub fn third_map(&mut self) -> Result<PathBuf> {
        let support = read_support_table(&self.support_path)?;
        self.standings_mut()?.compute(&support, Placement::Third)?;
        self.placement_map(
            Placement::Third,
            "Mapa trzeciej partii w powiatach, 2023",
            "Trzecia partia",
            "trzecia_partia.png",
        )
    }

    /// Sign-classified increase map restricted to the powiats where `party`
    /// holds `placement`, plus the tallied statistics.
    ///
    /// Fails when the placement's standings column has not been computed,
    /// naming the prerequisite analysis.
    pub fn placement_report(
        &self,
        party: Party,
        placement: Placement,
    ) -> Result<PlacementReport> {
        let standings = Standings::require(self.standings.as_ref())?;

        let placements = self
            .layer
            .join_column(&standings.placement_table(placement)?, placement.column())?;
        let increase = read_increase_table(&self.increase_path)?;
        let rates = self.layer.join_column(&increase, INCREASE_COLUMN)?;

        // One sign per region the party holds at this placement; None for
        // the rest, which render as outlines only.
        let placements = placements.str()?;
        let rates = rates.f64()?;
        let signs: Vec<Option<IncreaseSign>> = (0..self.layer.len())
            .map(|i| {
                (placements.get(i) == Some(party.name()))
                    .then(|| IncreaseSign::classify(rates.get(i)))
            })
            .collect();

        let report =
            PlacementReport::tally(party, placement, signs.iter().copied().flatten());
        info!(
            "{} holds placement {} in {} powiats with data; {} positive ({:.1}%)",
            party, placement, report.regions, report.positive, report.percent
        );

        let categories: Vec<Option<&str>> =
            signs.iter().map(|sign| sign.map(|s| s.label())).collect();
        let legend: Vec<(&str, RGBColor)> = IncreaseSign::ALL
            .iter()
            .map(|sign| (sign.label(), render::sign_color(*sign)))
            .collect();
        let file = match placement {
            Placement::First => format!("przyrost_{}.png", party.column()),
            _ => format!("przyrost_{}_miejsce{}.png", party.column(), placement.rank()),
        };
        render::render_categorical(
            &self.out_dir.join(file),
            &format!("{}, miejsce {} w tych powiatach", party.name().to_uppercase(), placement),
            &format!("Przyrost naturalny ({party})"),
            &self.layer.geoms,
            &categories,
            &legend,
        )?;

        Ok(report)
    }

    fn standings_mut(&mut self) -> Result<&mut Standings> {
        Standings::require(self.standings.as_mut())
    }

    /// Render a numeric column through a bucket scale with a diverging ramp.
    fn bucket_map(
        &self,
        values: &Column,
        scale: &BucketScale,
        title: &str,
        legend_title: &str,
        file: &str,
    ) -> Result<PathBuf> {
        let labels = scale.classify_column(values, "bucket")?;
        let labels = labels.str()?;
        let categories: Vec<Option<&str>> = labels
            .into_iter()
            .map(|label| label.or(Some("brak danych")))
            .collect();

        let n = scale.labels().len();
        let mut legend: Vec<(&str, RGBColor)> = scale
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| (*label, render::diverging_color(i, n)))
            .collect();
        legend.push(("brak danych", render::MISSING));

        let path = self.out_dir.join(file);
        render::render_categorical(&path, title, legend_title, &self.layer.geoms, &categories, &legend)?;
        Ok(path)
    }

    /// Render one standings column with the fixed party colors.
    fn placement_map(
        &self,
        place: Placement,
        title: &str,
        legend_title: &str,
        file: &str,
    ) -> Result<PathBuf> {
        let standings = Standings::require(self.standings.as_ref())?;
        let column = self
            .layer
            .join_column(&standings.placement_table(place)?, place.column())?;
        let labels = column.str()?;
        let categories: Vec<Option<&str>> = labels
            .into_iter()
            .map(|label| label.or(Some("brak danych")))
            .collect();

        let mut legend: Vec<(&str, RGBColor)> = Party::ALL
            .iter()
            .map(|party| (party.name(), render::party_color(*party)))
            .collect();
        legend.push(("brak danych", render::MISSING));

        let path = self.out_dir.join(file);
        render::render_categorical(&path, title, legend_title, &self.layer.geoms, &categories, &legend)?;
        Ok(path)
    }
}
