//! Folio TUI - terminal rendering of the portfolio document
//!
//! This crate presents the portfolio as one tall virtual document inside
//! the terminal. Scrolling feeds two controllers: the reveal-on-scroll
//! latch and the experience-timeline progress. The theme toggle
//! re-annotates the whole presentation, and a certificate detail overlay
//! renders on demand.

#![warn(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{
    content::ContentStore,
    modal::CertificateSelection,
    models::{presentation::PresentationMode, section_types::SectionType},
    progress::{is_entry_active, TimelineProgress, SCROLL_PERCENT_VAR},
    reveal::RevealController,
    style_vars::StyleVars,
    theme::{ThemeMode, ThemeState},
};
use folio_utils::string::{safe_truncate, wrap_text};
use folio_viz::{
    Accent, CardSide, IconRef, MarqueeDirection, ProjectSlot, RenderableSection, SectionContent,
    SectionEngine, VizConfig,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Terminal,
};
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    io::{self, Stdout},
    rc::Rc,
    time::{Duration, Instant},
};
use unicode_width::UnicodeWidthStr;

pub mod layout;

use layout::DocumentLayout;

/// Style variable carrying the root theme marker.
pub const COLOR_SCHEME_VAR: &str = "color-scheme";

/// TUI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Animation tick interval in milliseconds
    pub tick_rate_ms: u64,
    /// Initial theme
    pub theme: ThemeMode,
    /// Presentation mode (skin)
    pub mode: PresentationMode,
    /// Rows scrolled per page key
    pub page_step: usize,
    /// Marquee advance per tick, in columns
    pub marquee_step: usize,
    /// Hero typewriter advance per tick, in characters
    pub typing_step: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            theme: ThemeMode::Light,
            mode: PresentationMode::Gallery,
            page_step: 10,
            marquee_step: 2,
            typing_step: 6,
        }
    }
}

/// Transient interaction state for navigation and animation
#[derive(Debug, Clone)]
pub struct AppState {
    /// Scroll offset into the virtual document, in rows
    pub scroll: usize,
    /// Viewport height available for the document body, in rows
    pub viewport: usize,
    /// Rendered document width, in columns
    pub width: usize,
    /// Nav drawer open flag
    pub nav_open: bool,
    /// Marquee pause flag
    pub marquee_paused: bool,
    /// Marquee offset in columns, advanced by the tick
    pub marquee_tick: usize,
    /// Hero typewriter position in characters
    pub typed_chars: usize,
    /// Cursor into the certification list
    pub cert_cursor: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scroll: 0,
            viewport: 34,
            width: 120,
            nav_open: false,
            marquee_paused: false,
            marquee_tick: 0,
            typed_chars: 0,
            cert_cursor: 0,
        }
    }
}

/// The folio terminal application
pub struct FolioTui {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    state: AppState,
    config: TuiConfig,
    store: ContentStore,
    engine: SectionEngine,
    document: Vec<RenderableSection>,
    layout: DocumentLayout,
    theme: ThemeState,
    reveal: RevealController,
    progress: TimelineProgress,
    style_vars: Rc<RefCell<StyleVars>>,
    modal: CertificateSelection,
}

impl FolioTui {
    /// Create a TUI instance for interactive use, entering the alternate
    /// screen.
    pub fn new(store: ContentStore, config: TuiConfig) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();

        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to initialize terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        let size = terminal.size().context("Failed to read terminal size")?;

        let mut tui = Self::build(store, config, Some(terminal));
        tui.mount(size.width as usize, (size.height as usize).saturating_sub(6))?;
        Ok(tui)
    }

    /// Create a TUI instance for headless processing (preview, export,
    /// tests): no terminal, measurements from the viz defaults.
    pub fn new_headless(store: ContentStore, config: TuiConfig) -> Result<Self> {
        let viz = VizConfig::default();
        let width = viz.terminal_width as usize;
        let viewport = (viz.terminal_height as usize).saturating_sub(6);

        let mut tui = Self::build(store, config, None);
        tui.mount(width, viewport)?;
        Ok(tui)
    }

    fn build(
        store: ContentStore,
        config: TuiConfig,
        terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    ) -> Self {
        Self {
            terminal,
            state: AppState::default(),
            theme: ThemeState::new(config.theme),
            config,
            store,
            engine: SectionEngine::new(),
            document: Vec::new(),
            layout: DocumentLayout::default(),
            reveal: RevealController::new(),
            progress: TimelineProgress::new(),
            style_vars: Rc::new(RefCell::new(StyleVars::new())),
            modal: CertificateSelection::new(),
        }
    }

    /// Build the document, register observers, and run the eager initial
    /// measurement pass.
    fn mount(&mut self, width: usize, viewport: usize) -> Result<()> {
        self.state.width = width.max(40);
        self.state.viewport = viewport.max(5);

        // Headless sessions have no animation ticks; the typewriter starts
        // complete so preview and export see the full hero paragraph
        if self.terminal.is_none() {
            self.state.typed_chars = self.store.profile.about.chars().count();
        }

        self.document = self
            .engine
            .generate_document(&self.store, self.config.mode)?;

        // Theme annotation: the root marker mirrors into the shared style
        // variables on every change
        let vars = Rc::clone(&self.style_vars);
        vars.borrow_mut()
            .set(COLOR_SCHEME_VAR, self.theme.mode().root_marker());
        self.theme.subscribe(move |mode| {
            vars.borrow_mut().set(COLOR_SCHEME_VAR, mode.root_marker());
        });

        // The fill bar reads the style variable, not the controller
        self.progress
            .attach_style_mirror(Rc::clone(&self.style_vars));

        // One shared watcher for all revealable sections
        for section in &self.document {
            if section.section_type.supports_reveal() {
                self.reveal.observe(section.section_type.as_str());
            }
        }

        self.rebuild_layout();
        self.handle_scroll(); // initial check
        Ok(())
    }

    fn rebuild_layout(&mut self) {
        let heights: Vec<(SectionType, usize)> = self
            .document
            .iter()
            .map(|section| {
                (
                    section.section_type,
                    self.section_lines(section).len(),
                )
            })
            .collect();
        self.layout = DocumentLayout::build(&heights);
    }

    /// Feed both controllers from the current scroll position. Runs on
    /// every scroll change and once eagerly at mount.
    fn handle_scroll(&mut self) {
        let scroll = self.state.scroll;
        let viewport = self.state.viewport;

        // Timeline progress from the experience section's bounding rect;
        // absent section is a no-op
        let metrics = self
            .layout
            .metrics_for(SectionType::Experience, scroll, viewport);
        self.progress.update(metrics);

        // Intersection reports for the shared reveal watcher
        for extent in self.layout.extents().to_vec() {
            if extent.section.supports_reveal() {
                let ratio = self.layout.visible_ratio(extent.section, scroll, viewport);
                self.reveal
                    .record_intersection(extent.section.as_str(), ratio);
            }
        }
    }

    fn scroll_to(&mut self, target: usize) {
        let max = self.layout.max_scroll(self.state.viewport);
        let clamped = target.min(max);
        if clamped != self.state.scroll {
            self.state.scroll = clamped;
            self.handle_scroll();
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.state.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.state.scroll.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    fn jump_to_section(&mut self, section: SectionType) {
        if let Some(extent) = self.layout.extent(section) {
            self.scroll_to(extent.top);
        }
    }

    fn jump_by_tab(&mut self, forward: bool) {
        let nav = self.config.mode.nav_sections();
        let current = self.current_nav_section();
        let idx = nav.iter().position(|s| Some(*s) == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % nav.len()
        } else {
            (idx + nav.len() - 1) % nav.len()
        };
        self.jump_to_section(nav[next]);
    }

    /// Nav section the viewport currently sits in.
    fn current_nav_section(&self) -> Option<SectionType> {
        let section = self.layout.section_at(self.state.scroll)?;
        if section == SectionType::Footer {
            self.config.mode.nav_sections().last().copied()
        } else {
            Some(section)
        }
    }

    /// Advance animations by one tick.
    fn on_tick(&mut self) {
        if !self.state.marquee_paused {
            self.state.marquee_tick = self
                .state
                .marquee_tick
                .wrapping_add(self.config.marquee_step);
        }
        let about_len = self.store.profile.about.chars().count();
        if self.state.typed_chars < about_len {
            self.state.typed_chars =
                (self.state.typed_chars + self.config.typing_step).min(about_len);
        }
    }

    /// Run the main event loop.
    pub fn run(&mut self) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);
        let mut last_tick = Instant::now();

        let result = loop {
            if let Err(e) = self.draw() {
                break Err(e);
            }

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key.code) {
                            break Ok(());
                        }
                    }
                    Ok(Event::Resize(width, height)) => {
                        self.state.width = (width as usize).max(40);
                        self.state.viewport = (height as usize).saturating_sub(6).max(5);
                        self.rebuild_layout();
                        self.handle_scroll();
                    }
                    Ok(_) => {}
                    Err(e) => break Err(e.into()),
                },
                Ok(false) => {}
                Err(e) => break Err(e.into()),
            }

            if last_tick.elapsed() >= tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }
        };

        // Unmount: stop observing and hand the terminal back
        self.reveal.disconnect();
        self.restore_terminal()?;
        result
    }

    /// Handle one key press; returns true when the session should end.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        // The overlay swallows input until dismissed
        if self.modal.is_open() {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace => {
                    self.modal.clear();
                }
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('t') => {
                self.theme.toggle();
            }
            KeyCode::Char('n') => self.state.nav_open = !self.state.nav_open,
            KeyCode::Char('m') => self.state.marquee_paused = !self.state.marquee_paused,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_by(self.config.page_step as isize);
            }
            KeyCode::PageUp => self.scroll_by(-(self.config.page_step as isize)),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => {
                self.scroll_to(self.layout.max_scroll(self.state.viewport));
            }
            KeyCode::Tab => self.jump_by_tab(true),
            KeyCode::BackTab => self.jump_by_tab(false),
            KeyCode::Left | KeyCode::Char('h') => {
                let count = self.store.certifications.len();
                if count > 0 {
                    self.state.cert_cursor = (self.state.cert_cursor + count - 1) % count;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let count = self.store.certifications.len();
                if count > 0 {
                    self.state.cert_cursor = (self.state.cert_cursor + 1) % count;
                }
            }
            KeyCode::Enter => {
                let cursor = self.state.cert_cursor;
                self.modal.select(cursor, &self.store);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let nav = self.config.mode.nav_sections();
                let index = (c as u8 - b'1') as usize;
                if index < nav.len() {
                    self.jump_to_section(nav[index]);
                    self.state.nav_open = false;
                }
            }
            _ => {}
        }
        false
    }

    fn restore_terminal(&mut self) -> Result<()> {
        if self.terminal.take().is_some() {
            disable_raw_mode().context("Failed to disable raw mode")?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
                .context("Failed to restore terminal")?;
        }
        Ok(())
    }

    /// Draw one frame.
    fn draw(&mut self) -> Result<()> {
        let header = self.header_data();
        let lines = self.document_lines();
        let footer = self.footer_help_line();
        let modal = self.modal_data();
        let nav_drawer = self.nav_drawer_lines();
        let scroll = self.state.scroll;
        let base = base_style(self.theme.mode());

        if let Some(terminal) = &mut self.terminal {
            terminal.draw(move |f| {
                let size = f.size();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3), // Header
                        Constraint::Min(0),    // Body
                        Constraint::Length(3), // Footer
                    ])
                    .split(size);

                let (titles, selected, block_title) = header;
                let tabs = Tabs::new(titles)
                    .block(Block::default().borders(Borders::ALL).title(block_title))
                    .style(base)
                    .highlight_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                    .select(selected);
                f.render_widget(tabs, chunks[0]);

                let body = Paragraph::new(lines)
                    .style(base)
                    .scroll((scroll as u16, 0));
                f.render_widget(body, chunks[1]);

                let help = Paragraph::new(footer)
                    .block(Block::default().borders(Borders::ALL).title("Help"))
                    .style(base)
                    .wrap(Wrap { trim: true });
                f.render_widget(help, chunks[2]);

                if let Some(drawer) = nav_drawer {
                    let area = drawer_rect(chunks[1]);
                    f.render_widget(Clear, area);
                    let panel = Paragraph::new(drawer)
                        .block(Block::default().borders(Borders::ALL).title("Sections"))
                        .style(base);
                    f.render_widget(panel, area);
                }

                if let Some((title, body_lines)) = modal {
                    let area = modal_rect(size);
                    f.render_widget(Clear, area);
                    let panel = Paragraph::new(body_lines)
                        .block(Block::default().borders(Borders::ALL).title(title))
                        .style(base)
                        .wrap(Wrap { trim: true });
                    f.render_widget(panel, area);
                }
            })?;
        }
        Ok(())
    }

    fn header_data(&self) -> (Vec<String>, usize, String) {
        let nav = self.config.mode.nav_sections();
        let titles: Vec<String> = nav
            .iter()
            .map(|s| self.config.mode.nav_label(*s).to_string())
            .collect();
        let current = self.current_nav_section();
        let selected = nav
            .iter()
            .position(|s| Some(*s) == current)
            .unwrap_or(0);
        let marker = self
            .style_vars
            .borrow()
            .get(COLOR_SCHEME_VAR)
            .unwrap_or("light")
            .to_string();
        let title = format!(" {} — {} ", self.store.profile.name, marker);
        (titles, selected, title)
    }

    fn footer_help_line(&self) -> Line<'static> {
        let key = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled("q", key),
            Span::raw(":quit "),
            Span::styled("j/k", key),
            Span::raw(":scroll "),
            Span::styled("Tab", key),
            Span::raw(":sections "),
            Span::styled("1-8", key),
            Span::raw(":jump "),
            Span::styled("t", key),
            Span::raw(":theme "),
            Span::styled("n", key),
            Span::raw(":nav "),
            Span::styled("m", key),
            Span::raw(":marquee "),
            Span::styled("←/→+Enter", key),
            Span::raw(":certificate"),
        ])
    }

    fn nav_drawer_lines(&self) -> Option<Vec<Line<'static>>> {
        if !self.state.nav_open {
            return None;
        }
        let accent = accent_color(mode_accent(self.config.mode), self.theme.mode());
        let lines = self
            .config
            .mode
            .nav_sections()
            .iter()
            .enumerate()
            .map(|(idx, section)| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", idx + 1),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "#{} — {}",
                        self.config.mode.anchor(*section),
                        self.config.mode.nav_label(*section)
                    )),
                ])
            })
            .collect();
        Some(lines)
    }

    fn modal_data(&self) -> Option<(String, Vec<Line<'static>>)> {
        let cert = self.modal.certificate(&self.store)?;
        let embed = self.modal.embed_url(&self.store);
        let accent = accent_color(mode_accent(self.config.mode), self.theme.mode());

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                cert.issuer.to_uppercase(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];
        match embed {
            Some(url) => {
                lines.push(Line::raw("Certificate preview:"));
                lines.push(Line::from(Span::styled(
                    url,
                    Style::default().add_modifier(Modifier::UNDERLINED),
                )));
            }
            None => lines.push(Line::raw("No certificate link on file.")),
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Esc closes",
            Style::default().fg(Color::DarkGray),
        )));

        Some((format!(" {} ", cert.name), lines))
    }

    // ----- document rendering -------------------------------------------

    /// All document lines in order. Every section contributes exactly the
    /// height the layout was measured with; transient state (ticks,
    /// reveal, progress) never changes a section's line count.
    fn document_lines(&self) -> Vec<Line<'static>> {
        self.document
            .iter()
            .flat_map(|section| self.section_lines(section))
            .collect()
    }

    fn section_lines(&self, section: &RenderableSection) -> Vec<Line<'static>> {
        let revealed = !section.section_type.supports_reveal()
            || self.reveal.is_revealed(section.section_type.as_str());

        match &section.content {
            SectionContent::Hero { .. } => self.hero_lines(section),
            _ => {
                let mut lines = self.heading_lines(&section.title, revealed);
                let body = self.body_lines(section);
                if revealed {
                    lines.extend(body);
                } else {
                    // Hidden state occupies the same rows so scroll
                    // geometry never shifts when an element reveals
                    lines.extend((0..body.len()).map(|_| Line::raw("")));
                }
                lines
            }
        }
    }

    fn body_lines(&self, section: &RenderableSection) -> Vec<Line<'static>> {
        match &section.content {
            SectionContent::Hero { .. } => Vec::new(),
            SectionContent::Expertise { rows } => self.expertise_lines(rows),
            SectionContent::Experience { cards, show_links } => {
                self.experience_lines(cards, *show_links)
            }
            SectionContent::Projects { cards } => self.projects_lines(cards),
            SectionContent::Awards { cards } => self.awards_lines(cards),
            SectionContent::Certifications { cards } => self.certifications_lines(cards),
            SectionContent::Research { cards } => self.research_lines(cards),
            SectionContent::Education { cards } => self.education_lines(cards),
            SectionContent::Footer {
                heading,
                email,
                resume,
                social,
                hire_me,
                copyright,
            } => self.footer_lines(heading, email, resume, social, hire_me.as_ref(), copyright),
        }
    }

    fn heading_lines(&self, title: &str, revealed: bool) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let accent = accent_color(mode_accent(self.config.mode), theme);
        let title_style = if revealed {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let rule_width = title.width().min(self.state.width);
        vec![
            Line::raw(""),
            Line::from(Span::styled(format!("  {}", title.to_uppercase()), title_style)),
            Line::from(Span::styled(
                format!("  {}", "─".repeat(rule_width)),
                Style::default().fg(accent),
            )),
            Line::raw(""),
        ]
    }

    fn hero_lines(&self, section: &RenderableSection) -> Vec<Line<'static>> {
        let SectionContent::Hero {
            greeting,
            name,
            about,
            badge,
            social,
            ..
        } = &section.content
        else {
            return Vec::new();
        };

        let theme = self.theme.mode();
        let accent = accent_color(mode_accent(self.config.mode), theme);
        let text_width = self.state.width.saturating_sub(4).max(20);

        // The full paragraph reserves its layout; the typewriter fills it in
        let reserved = wrap_text(about, text_width);
        let typed: String = about.chars().take(self.state.typed_chars).collect();
        let complete = self.state.typed_chars >= about.chars().count();
        let mut typed_lines = wrap_text(&typed, text_width);
        if !complete {
            if let Some(last) = typed_lines.last_mut() {
                last.push('|');
            }
        }
        typed_lines.resize(reserved.len(), String::new());

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {greeting}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", name.to_uppercase()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];
        lines.extend(
            typed_lines
                .into_iter()
                .map(|l| Line::from(Span::styled(format!("  {l}"), dim_style(theme)))),
        );
        lines.push(Line::raw(""));

        let mut social_spans = Vec::new();
        for link in social {
            social_spans.push(Span::styled(
                format!("  {} ", link.label),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
            social_spans.push(Span::styled(
                link.url.clone(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines.push(Line::from(social_spans));
        lines.push(Line::from(Span::styled(
            format!("  ✦ {badge}"),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::raw(""));
        lines
    }

    fn expertise_lines(&self, rows: &[folio_viz::MarqueeRow]) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let accent = accent_color(mode_accent(self.config.mode), theme);
        let mut lines = Vec::new();

        for row in rows {
            lines.push(Line::from(Span::styled(
                format!("  {}", row.category.to_uppercase()),
                Style::default().fg(accent),
            )));

            let strip = marquee_strip(&row.items);
            let visible = marquee_window(
                &strip,
                self.state.marquee_tick,
                row.direction,
                self.state.width.saturating_sub(4).max(20),
            );
            lines.push(Line::from(Span::styled(
                format!("  {visible}"),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::raw(""));
        }

        lines
    }

    fn experience_lines(
        &self,
        cards: &[folio_viz::ExperienceCard],
        show_links: bool,
    ) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let accent = accent_color(mode_accent(self.config.mode), theme);
        let count = cards.len();
        let percent = self.progress.percent();
        let text_width = self.state.width.saturating_sub(10).max(20);

        // Card rows first, so the fill bar can be sized from the region
        // height the way the style variable drives the page version
        let mut card_rows: Vec<Vec<Line<'static>>> = Vec::new();
        let mut region_height = 0usize;
        for (idx, card) in cards.iter().enumerate() {
            let active = is_entry_active(percent, idx, count);
            let dot_style = if active {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let dot = if active { "●" } else { "○" };

            let mut rows = vec![
                Line::from(vec![
                    Span::styled(format!("{dot} "), dot_style),
                    Span::styled(
                        card.company.to_uppercase(),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", card.role),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ];
            for bullet in &card.bullets {
                for (i, wrapped) in wrap_text(bullet, text_width).into_iter().enumerate() {
                    let prefix = if i == 0 { "  · " } else { "    " };
                    rows.push(Line::from(Span::styled(
                        format!("{prefix}{wrapped}"),
                        dim_style(theme),
                    )));
                }
            }
            let mut meta = format!("  {} · {}", card.period, card.location);
            if show_links {
                if let Some(link) = &card.link {
                    meta.push_str(&format!(" · {link}"));
                }
            }
            rows.push(Line::from(Span::styled(
                meta,
                Style::default().fg(Color::DarkGray),
            )));
            rows.push(Line::raw(""));

            region_height += rows.len();
            card_rows.push(rows);
        }

        // Fill bar height driven by the shared style variable, the
        // declarative consumer next to the dot activation above
        let var_percent = self
            .style_vars
            .borrow()
            .get_percent(SCROLL_PERCENT_VAR)
            .unwrap_or(0.0);
        let filled_rows = ((var_percent / 100.0) * region_height as f64).round() as usize;

        let mut lines = Vec::with_capacity(region_height);
        let mut row_index = 0usize;
        for rows in card_rows {
            for row in rows {
                let gutter = if row_index < filled_rows {
                    Span::styled("┃ ", Style::default().fg(accent))
                } else {
                    Span::styled("│ ", Style::default().fg(Color::DarkGray))
                };
                let mut spans = vec![gutter];
                spans.extend(row.spans);
                lines.push(Line::from(spans));
                row_index += 1;
            }
        }
        lines
    }

    fn projects_lines(&self, cards: &[folio_viz::ProjectCard]) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let text_width = self.state.width.saturating_sub(6).max(20);
        let clamp = self.engine.config().description_clamp;
        let mut lines = Vec::new();

        for card in cards {
            let accent = accent_color(Accent::Pink, theme);
            let marker = match card.slot {
                ProjectSlot::Featured => "★",
                ProjectSlot::Standard => "▪",
            };
            lines.push(Line::from(Span::styled(
                format!("  {marker} {}", card.caption.to_uppercase()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", card.title),
                Style::default().add_modifier(Modifier::BOLD),
            )));

            let mut description = wrap_text(&card.description, text_width);
            if card.slot == ProjectSlot::Standard && description.len() > clamp {
                description.truncate(clamp);
                if let Some(last) = description.last_mut() {
                    last.push('…');
                }
            }
            for wrapped in description {
                lines.push(Line::from(Span::styled(
                    format!("  {wrapped}"),
                    dim_style(theme),
                )));
            }

            let tags = card
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(Span::styled(
                format!("  {tags}"),
                Style::default().fg(accent),
            )));

            let mut link_spans = vec![Span::raw("  ")];
            if let Some(url) = &card.visit_url {
                link_spans.push(Span::styled("Visit ", Style::default().add_modifier(Modifier::BOLD)));
                link_spans.push(Span::styled(
                    url.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ));
            }
            if let Some(github) = &card.github {
                if card.visit_url.as_deref() != Some(github.as_str()) {
                    link_spans.push(Span::styled(
                        "  GitHub ",
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                    link_spans.push(Span::styled(
                        github.clone(),
                        Style::default().add_modifier(Modifier::UNDERLINED),
                    ));
                }
            }
            lines.push(Line::from(link_spans));
            lines.push(Line::raw(""));
        }

        lines
    }

    fn awards_lines(&self, cards: &[folio_viz::AwardCard]) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let text_width = self.state.width.saturating_sub(12).max(20);
        let mut lines = Vec::new();

        for card in cards {
            let accent = accent_color(card.accent, theme);
            let indent = match card.side {
                CardSide::Left => "  ".to_string(),
                CardSide::Right => " ".repeat(self.state.width / 3),
            };
            lines.push(Line::from(Span::styled(
                format!("{indent}{}", card.date),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("{indent}🏆 {}", card.title),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("{indent}{}", card.org.to_uppercase()),
                Style::default().fg(accent),
            )));
            for wrapped in wrap_text(&card.description, text_width) {
                lines.push(Line::from(Span::styled(
                    format!("{indent}{wrapped}"),
                    dim_style(theme),
                )));
            }
            lines.push(Line::raw(""));
        }

        lines
    }

    fn certifications_lines(&self, cards: &[folio_viz::CertificateCard]) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let accent = accent_color(mode_accent(self.config.mode), theme);
        let mut lines = vec![
            Line::from(Span::styled(
                "  ←/→ select · Enter opens the certificate detail",
                Style::default().fg(Color::DarkGray),
            )),
            Line::raw(""),
        ];

        for (idx, card) in cards.iter().enumerate() {
            let selected = idx == self.state.cert_cursor;
            let cursor = if selected { "▸" } else { " " };
            let name_style = if selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {cursor} "), Style::default().fg(accent)),
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::styled(card.name.clone(), name_style),
            ]));
            let embed = card
                .embed_url
                .clone()
                .unwrap_or_else(|| "no certificate link".to_string());
            let detail = safe_truncate(
                &format!("{} · {}", card.issuer.to_uppercase(), embed),
                self.state.width.saturating_sub(8).max(20),
            );
            lines.push(Line::from(Span::styled(
                format!("      {detail}"),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::raw(""));
        }

        lines
    }

    fn research_lines(&self, cards: &[folio_viz::PublicationCard]) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let text_width = self.state.width.saturating_sub(6).max(20);
        let mut lines = Vec::new();

        for card in cards {
            let accent = accent_color(card.accent, theme);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", card.year),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    card.title.clone(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ]));
            let mut description = wrap_text(&card.description, text_width);
            description.truncate(2);
            for wrapped in description {
                lines.push(Line::from(Span::styled(
                    format!("  {wrapped}"),
                    dim_style(theme),
                )));
            }
            let mut id_spans = vec![Span::styled(
                format!("  ID: {}", card.identifier),
                Style::default().fg(Color::DarkGray),
            )];
            if let Some(url) = &card.doi_url {
                id_spans.push(Span::raw("  "));
                id_spans.push(Span::styled(
                    url.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ));
            }
            lines.push(Line::from(id_spans));
            lines.push(Line::raw(""));
        }

        lines
    }

    fn education_lines(&self, cards: &[folio_viz::EducationCard]) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let mut lines = Vec::new();

        for card in cards {
            let accent = accent_color(card.accent, theme);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  ◉ {} ", card.milestone),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    card.school.to_uppercase(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", card.degree),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "    {} · {} · {}",
                    card.location, card.period, card.details
                ),
                dim_style(theme),
            )));
            lines.push(Line::raw(""));
        }

        lines
    }

    fn footer_lines(
        &self,
        heading: &str,
        email: &folio_viz::OutboundLink,
        resume: &folio_viz::OutboundLink,
        social: &[folio_viz::OutboundLink],
        hire_me: Option<&folio_viz::OutboundLink>,
        copyright: &str,
    ) -> Vec<Line<'static>> {
        let theme = self.theme.mode();
        let accent = accent_color(mode_accent(self.config.mode), theme);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {heading}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} ", email.label),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    email.url.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Resume ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    resume.url.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ]),
        ];

        let social_text = social
            .iter()
            .map(|link| format!("{} {}", link.label, link.url))
            .collect::<Vec<_>>()
            .join("   ");
        lines.push(Line::from(Span::styled(
            format!("  {social_text}"),
            dim_style(theme),
        )));

        if let Some(link) = hire_me {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", link.label),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    link.url.clone(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("  {copyright}"),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::raw(""));
        lines
    }

    // ----- non-interactive modes ----------------------------------------

    /// Plain-text render of every section, for preview mode.
    pub fn preview_text(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        for section in &self.document {
            let title = section.title.to_uppercase();
            writeln!(output, "{}", "═".repeat(title.width() + 4)).ok();
            writeln!(output, "  {title}").ok();
            writeln!(output, "{}", "═".repeat(title.width() + 4)).ok();
            let lines = if matches!(section.content, SectionContent::Hero { .. }) {
                self.hero_lines(section)
            } else {
                self.body_lines(section)
            };
            for line in lines {
                let text: String = line
                    .spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect();
                writeln!(output, "{}", text.trim_end()).ok();
            }
            writeln!(output).ok();
        }

        output
    }

    pub fn document(&self) -> &[RenderableSection] {
        &self.document
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress.percent()
    }

    pub fn style_var(&self, name: &str) -> Option<String> {
        self.style_vars.borrow().get(name).map(str::to_string)
    }

    pub fn is_revealed(&self, section: SectionType) -> bool {
        self.reveal.is_revealed(section.as_str())
    }

    pub fn modal_mut(&mut self) -> &mut CertificateSelection {
        &mut self.modal
    }

    /// Test/driver access to the scroll position.
    pub fn set_scroll(&mut self, scroll: usize) {
        self.scroll_to(scroll);
    }
}

impl Drop for FolioTui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Run the interactive TUI with the given content and configuration.
pub fn run_tui(store: ContentStore, config: TuiConfig) -> Result<()> {
    let mut tui = FolioTui::new(store, config)?;
    tui.run()
}

/// Export the generated document as structured JSON.
pub fn export_structured_data(
    store: &ContentStore,
    document: &[RenderableSection],
) -> Result<String> {
    let export = serde_json::json!({
        "generated_at": chrono::Utc::now(),
        "profile": store.profile,
        "sections": document,
    });
    serde_json::to_string_pretty(&export).context("Failed to serialize export")
}

// ----- styling helpers ---------------------------------------------------

/// Base foreground/background for a theme.
fn base_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::Black).bg(Color::White),
        ThemeMode::Dark => Style::default().fg(Color::Gray).bg(Color::Black),
    }
}

/// Secondary-text style for a theme.
fn dim_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::default().fg(Color::DarkGray),
        ThemeMode::Dark => Style::default().fg(Color::Gray),
    }
}

/// The leading accent of a presentation mode.
pub fn mode_accent(mode: PresentationMode) -> Accent {
    match mode {
        PresentationMode::Gallery => Accent::Indigo,
        PresentationMode::Studio => Accent::Emerald,
    }
}

/// Map a palette accent to a terminal color for the active theme.
pub fn accent_color(accent: Accent, theme: ThemeMode) -> Color {
    let dark = theme.is_dark();
    match accent {
        Accent::Indigo | Accent::Violet => {
            if dark {
                Color::LightMagenta
            } else {
                Color::Magenta
            }
        }
        Accent::Blue => {
            if dark {
                Color::LightBlue
            } else {
                Color::Blue
            }
        }
        Accent::Orange => Color::Yellow,
        Accent::Emerald => {
            if dark {
                Color::LightGreen
            } else {
                Color::Green
            }
        }
        Accent::Purple | Accent::Pink | Accent::Rose => {
            if dark {
                Color::LightMagenta
            } else {
                Color::Magenta
            }
        }
        Accent::Red => {
            if dark {
                Color::LightRed
            } else {
                Color::Red
            }
        }
    }
}

/// One full pass of marquee chips as a flat string.
fn marquee_strip(items: &[folio_viz::MarqueeItem]) -> String {
    let mut strip = String::new();
    for item in items {
        match &item.icon {
            IconRef::Url(_) => strip.push_str("◆ "),
            IconRef::Initials(initials) => {
                strip.push('[');
                strip.push_str(initials);
                strip.push_str("] ");
            }
        }
        strip.push_str(&item.name);
        strip.push_str("   ");
    }
    strip
}

/// Window into the endlessly repeating strip at the given offset; the
/// direction decides which way the offset travels.
fn marquee_window(strip: &str, tick: usize, direction: MarqueeDirection, width: usize) -> String {
    let chars: Vec<char> = strip.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let len = chars.len();
    let offset = match direction {
        MarqueeDirection::Leftward => tick % len,
        MarqueeDirection::Rightward => len - (tick % len),
    };

    let mut window = String::new();
    let mut column = 0usize;
    let mut index = offset % len;
    while column < width {
        let c = chars[index % len];
        let char_width = UnicodeWidthStr::width(c.to_string().as_str()).max(1);
        if column + char_width > width {
            break;
        }
        window.push(c);
        column += char_width;
        index += 1;
    }
    window
}

/// Centered overlay area for the certificate detail.
fn modal_rect(size: Rect) -> Rect {
    let width = ((u32::from(size.width) * 7 / 10) as u16).clamp(30, size.width.max(1));
    let height = ((u32::from(size.height) * 6 / 10) as u16).clamp(9, size.height.max(1));
    Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width: width.min(size.width),
        height: height.min(size.height),
    }
}

/// Drawer area anchored under the header.
fn drawer_rect(body: Rect) -> Rect {
    let width = (body.width / 3).clamp(24, body.width);
    let height = (body.height).min(12);
    Rect {
        x: body.x + 1,
        y: body.y,
        width: width.min(body.width),
        height,
    }
}
