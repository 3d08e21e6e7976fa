use super::compositor::{expand_cards, paginate};
use super::config::RenderConfig;
use super::emit::render_pages;
use crate::deck::Deck;
use crate::error::PipelineError;
use crate::images::collect_rendered_images;
use deckpress_layout::{GridLayout, compute_layout};
use deckpress_render_core::DocumentSink;
use deckpress_render_printpdf::PrintPdfSink;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

/// Summary of one finished generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub pages: usize,
    /// Card copies placed, after expanding repeat counts.
    pub cards: usize,
    /// Cells that were drawn as placeholder borders instead of images.
    pub placeholders: usize,
}

/// Turns a deck into a duplex-ready print document.
#[derive(Debug, Clone, Default)]
pub struct DeckGenerator {
    config: RenderConfig,
}

impl DeckGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The grid the deck's cards will be printed on.
    pub fn layout_for(&self, deck: &Deck) -> Result<GridLayout, PipelineError> {
        Ok(compute_layout(deck.card_size(), deck.paper_size)?)
    }

    /// Paginates `deck` and draws every page into `sink`.
    ///
    /// The layout is computed before anything is drawn, so an invalid card
    /// size leaves the sink untouched.
    pub fn render_into<S: DocumentSink>(
        &self,
        deck: &Deck,
        sink: &mut S,
    ) -> Result<GenerationReport, PipelineError> {
        let layout = self.layout_for(deck)?;
        debug!(
            "Grid {}x{} on {} paper, margins {:.2}mm/{:.2}mm, spacing {}mm",
            layout.columns,
            layout.rows,
            deck.paper_size.name(),
            layout.margin_left,
            layout.margin_top,
            layout.spacing
        );

        let images = collect_rendered_images(&deck.rendered_cards);
        let cards = expand_cards(&deck.cards);
        let pages = paginate(&cards, &layout, deck.draw_cut_guides, &images);
        let stats = render_pages(&pages, &images, sink, &self.config)?;

        Ok(GenerationReport {
            pages: stats.pages,
            cards: cards.len(),
            placeholders: stats.placeholders,
        })
    }

    /// Writes the finished PDF to `writer` and hands the writer back.
    pub fn generate<W: Write>(
        &self,
        deck: &Deck,
        writer: W,
    ) -> Result<(W, GenerationReport), PipelineError> {
        let start = Instant::now();
        let mut sink = PrintPdfSink::new(writer, &self.config.title);
        let report = self.render_into(deck, &mut sink)?;
        let writer = sink.finish()?;
        info!(
            "Generated {} pages for {} cards in {:.2?}",
            report.pages,
            report.cards,
            start.elapsed()
        );
        Ok((writer, report))
    }

    /// Writes the finished PDF to `path`, creating parent directories.
    ///
    /// Nothing is created when the deck cannot be laid out, and a partially
    /// written file is removed when generation fails.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        deck: &Deck,
        path: P,
    ) -> Result<GenerationReport, PipelineError> {
        let output_path = path.as_ref();
        self.layout_for(deck)?;

        if let Some(parent_dir) = output_path.parent()
            && !parent_dir.as_os_str().is_empty()
        {
            fs::create_dir_all(parent_dir)?;
        }
        let file = fs::File::create(output_path)?;
        let writer = io::BufWriter::new(file);

        let result = self.generate(deck, writer).and_then(|(writer, report)| {
            writer
                .into_inner()
                .map_err(|e| PipelineError::Io(e.into_error()))?;
            Ok(report)
        });

        if result.is_err() {
            let _ = fs::remove_file(output_path);
        }
        result
    }
}
