//! The eleven behavioral pattern demos.

use std::io::Write;

use crate::catalog::PatternDemo;
use crate::error::GalleryError;
use crate::Result;

// --- Chain of Responsibility ---

struct SupportLevel {
    name: &'static str,
    severity_limit: u8,
    next: Option<Box<SupportLevel>>,
}

impl SupportLevel {
    fn handle(&self, subject: &str, severity: u8, out: &mut dyn Write) -> Result<()> {
        if severity <= self.severity_limit {
            writeln!(out, "  {} resolves '{subject}' (severity {severity})", self.name)?;
        } else if let Some(next) = &self.next {
            writeln!(out, "  {} passes '{subject}' up the chain", self.name)?;
            next.handle(subject, severity, out)?;
        } else {
            writeln!(out, "  nobody left, '{subject}' paged to on-call engineering")?;
        }
        Ok(())
    }
}

pub struct ChainOfResponsibilityDemo;

impl PatternDemo for ChainOfResponsibilityDemo {
    fn name(&self) -> &str {
        "Chain of Responsibility"
    }

    fn description(&self) -> &str {
        "Escalates support tickets through handlers until one can resolve them."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let chain = SupportLevel {
            name: "helpdesk",
            severity_limit: 2,
            next: Some(Box::new(SupportLevel {
                name: "second line",
                severity_limit: 5,
                next: Some(Box::new(SupportLevel {
                    name: "site reliability",
                    severity_limit: 8,
                    next: None,
                })),
            })),
        };

        for (subject, severity) in [
            ("password reset", 1),
            ("printer on fire", 4),
            ("database corrupted", 9),
        ] {
            writeln!(out, "Ticket '{subject}' arrives:")?;
            chain.handle(subject, severity, out)?;
        }
        Ok(())
    }
}

// --- Command ---

trait EditCommand {
    fn label(&self) -> String;
    fn apply(&self, doc: &mut String);
    fn revert(&self, doc: &mut String);
}

struct Append(&'static str);

impl EditCommand for Append {
    fn label(&self) -> String {
        format!("append {:?}", self.0)
    }

    fn apply(&self, doc: &mut String) {
        doc.push_str(self.0);
    }

    fn revert(&self, doc: &mut String) {
        let keep = doc.len().saturating_sub(self.0.len());
        doc.truncate(keep);
    }
}

pub struct CommandDemo;

impl PatternDemo for CommandDemo {
    fn name(&self) -> &str {
        "Command"
    }

    fn description(&self) -> &str {
        "Encapsulates edits as objects so a history stack can undo them."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut doc = String::new();
        let mut history: Vec<Box<dyn EditCommand>> = Vec::new();

        for command in [Append("Hello"), Append(", world"), Append("!!!")] {
            command.apply(&mut doc);
            writeln!(out, "{:<20} -> {doc:?}", command.label())?;
            history.push(Box::new(command));
        }

        while history.len() > 1 {
            if let Some(command) = history.pop() {
                command.revert(&mut doc);
                writeln!(out, "undo {:<15} -> {doc:?}", command.label())?;
            }
        }
        Ok(())
    }
}

// --- Interpreter ---

enum Expr {
    Num(i64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn eval(&self) -> i64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Add(a, b) => a.eval() + b.eval(),
            Expr::Sub(a, b) => a.eval() - b.eval(),
            Expr::Mul(a, b) => a.eval() * b.eval(),
        }
    }
}

/// Recursive-descent parser for whitespace-separated `+ - *` arithmetic.
struct ExprParser<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> ExprParser<'a> {
    fn parse(input: &'a str) -> Result<Expr> {
        let mut parser = ExprParser {
            tokens: input.split_whitespace().collect(),
            pos: 0,
        };
        let expr = parser.expr()?;
        if parser.pos != parser.tokens.len() {
            return Err(GalleryError::Demonstration(format!(
                "trailing input at token {}",
                parser.pos
            )));
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut left = self.term()?;
        while let Some(op @ ("+" | "-")) = self.peek() {
            self.pos += 1;
            let right = self.term()?;
            left = if op == "+" {
                Expr::Add(Box::new(left), Box::new(right))
            } else {
                Expr::Sub(Box::new(left), Box::new(right))
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut left = self.number()?;
        while self.peek() == Some("*") {
            self.pos += 1;
            let right = self.number()?;
            left = Expr::Mul(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn number(&mut self) -> Result<Expr> {
        let token = self.peek().ok_or_else(|| {
            GalleryError::Demonstration("expected a number, found end of input".to_string())
        })?;
        self.pos += 1;
        let value: i64 = token.parse().map_err(|_| {
            GalleryError::Demonstration(format!("expected a number, found {token:?}"))
        })?;
        Ok(Expr::Num(value))
    }
}

pub struct InterpreterDemo {
    programs: Vec<(&'static str, Expr)>,
}

impl InterpreterDemo {
    /// Pre-parses the sample programs; a grammar change that breaks them
    /// surfaces as a construction failure rather than a bad session.
    pub fn new() -> Result<Self> {
        let sources = ["7 + 3 * 2", "10 - 4 - 3", "2 * 3 * 4 + 1"];
        let mut programs = Vec::with_capacity(sources.len());
        for source in sources {
            let expr = ExprParser::parse(source).map_err(|err| GalleryError::Construction {
                name: "Interpreter".to_string(),
                reason: err.to_string(),
            })?;
            programs.push((source, expr));
        }
        Ok(InterpreterDemo { programs })
    }
}

impl PatternDemo for InterpreterDemo {
    fn name(&self) -> &str {
        "Interpreter"
    }

    fn description(&self) -> &str {
        "Parses little arithmetic programs into a tree and evaluates them."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        for (source, expr) in &self.programs {
            writeln!(out, "{source} = {}", expr.eval())?;
        }
        writeln!(out, "Each expression node interprets itself recursively.")?;
        Ok(())
    }
}

// --- Iterator ---

struct Track {
    title: &'static str,
    seconds: u32,
}

struct Playlist {
    tracks: Vec<Track>,
}

struct PlaylistIter<'a> {
    tracks: &'a [Track],
    pos: usize,
}

impl<'a> Iterator for PlaylistIter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        let track = self.tracks.get(self.pos)?;
        self.pos += 1;
        Some(track)
    }
}

impl Playlist {
    fn iter(&self) -> PlaylistIter<'_> {
        PlaylistIter {
            tracks: &self.tracks,
            pos: 0,
        }
    }
}

pub struct IteratorDemo;

impl PatternDemo for IteratorDemo {
    fn name(&self) -> &str {
        "Iterator"
    }

    fn description(&self) -> &str {
        "A hand-written playlist iterator that plugs into every std adapter."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let playlist = Playlist {
            tracks: vec![
                Track { title: "Overture", seconds: 154 },
                Track { title: "Interlude", seconds: 92 },
                Track { title: "Finale", seconds: 311 },
            ],
        };

        for track in playlist.iter() {
            writeln!(out, "{} ({}s)", track.title, track.seconds)?;
        }

        let total: u32 = playlist.iter().map(|track| track.seconds).sum();
        let long = playlist.iter().filter(|track| track.seconds > 100).count();
        writeln!(out, "total {total}s, {long} tracks over 100s")?;
        Ok(())
    }
}

// --- Mediator ---

struct ChatRoom {
    members: Vec<&'static str>,
    transcript: Vec<String>,
}

impl ChatRoom {
    fn new(members: Vec<&'static str>) -> Self {
        ChatRoom {
            members,
            transcript: Vec::new(),
        }
    }

    fn broadcast(&mut self, from: &str, message: &str) {
        for member in &self.members {
            if *member != from {
                self.transcript
                    .push(format!("{from} -> {member}: {message}"));
            }
        }
    }
}

pub struct MediatorDemo;

impl PatternDemo for MediatorDemo {
    fn name(&self) -> &str {
        "Mediator"
    }

    fn description(&self) -> &str {
        "Chat members talk only to the room, never directly to each other."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut room = ChatRoom::new(vec!["ada", "grace", "linus"]);
        room.broadcast("ada", "analysis engine is ready");
        room.broadcast("grace", "compiling now");

        for line in &room.transcript {
            writeln!(out, "{line}")?;
        }
        writeln!(
            out,
            "{} members, every delivery routed through the room.",
            room.members.len()
        )?;
        Ok(())
    }
}

// --- Memento ---

struct Editor {
    text: String,
}

struct Snapshot {
    text: String,
}

impl Editor {
    fn save(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        self.text = snapshot.text.clone();
    }
}

pub struct MementoDemo;

impl PatternDemo for MementoDemo {
    fn name(&self) -> &str {
        "Memento"
    }

    fn description(&self) -> &str {
        "Captures editor state in opaque snapshots and rolls back to them."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut editor = Editor {
            text: "Dear committee,".to_string(),
        };
        let draft = editor.save();

        editor.text.push_str(" send more RAM immediately!");
        writeln!(out, "after edits: {:?}", editor.text)?;

        editor.restore(&draft);
        writeln!(out, "restored:    {:?}", editor.text)?;
        writeln!(out, "The snapshot never exposed the editor's internals.")?;
        Ok(())
    }
}

// --- Observer ---

trait WeatherObserver {
    fn observer_name(&self) -> &'static str;
    fn on_reading(&self, celsius: f64) -> String;
}

struct PhoneDisplay;
struct Billboard;
struct HeatAlarm {
    threshold: f64,
}

impl WeatherObserver for PhoneDisplay {
    fn observer_name(&self) -> &'static str {
        "phone display"
    }
    fn on_reading(&self, celsius: f64) -> String {
        format!("shows {celsius:.1} C")
    }
}

impl WeatherObserver for Billboard {
    fn observer_name(&self) -> &'static str {
        "billboard"
    }
    fn on_reading(&self, celsius: f64) -> String {
        format!("scrolls 'currently {celsius:.0} degrees'")
    }
}

impl WeatherObserver for HeatAlarm {
    fn observer_name(&self) -> &'static str {
        "heat alarm"
    }
    fn on_reading(&self, celsius: f64) -> String {
        if celsius > self.threshold {
            format!("SIREN: {celsius:.1} C exceeds {:.1} C", self.threshold)
        } else {
            "stays quiet".to_string()
        }
    }
}

struct WeatherStation {
    observers: Vec<Box<dyn WeatherObserver>>,
}

impl WeatherStation {
    fn publish(&self, celsius: f64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "station reads {celsius:.1} C:")?;
        for observer in &self.observers {
            writeln!(out, "  {} {}", observer.observer_name(), observer.on_reading(celsius))?;
        }
        Ok(())
    }
}

pub struct ObserverDemo;

impl PatternDemo for ObserverDemo {
    fn name(&self) -> &str {
        "Observer"
    }

    fn description(&self) -> &str {
        "A weather station pushes readings to subscribers it knows nothing about."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let station = WeatherStation {
            observers: vec![
                Box::new(PhoneDisplay),
                Box::new(Billboard),
                Box::new(HeatAlarm { threshold: 35.0 }),
            ],
        };
        station.publish(21.5, out)?;
        station.publish(38.2, out)?;
        Ok(())
    }
}

// --- State ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LightState {
    Red,
    Green,
    Yellow,
}

impl LightState {
    fn next(self) -> LightState {
        match self {
            LightState::Red => LightState::Green,
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            LightState::Red => "stop",
            LightState::Green => "go",
            LightState::Yellow => "prepare to stop",
        }
    }

    fn hold_secs(&self) -> u32 {
        match self {
            LightState::Red => 30,
            LightState::Green => 25,
            LightState::Yellow => 5,
        }
    }
}

pub struct StateDemo;

impl PatternDemo for StateDemo {
    fn name(&self) -> &str {
        "State"
    }

    fn description(&self) -> &str {
        "A traffic light whose behavior lives in its current state."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut light = LightState::Red;
        for _ in 0..6 {
            writeln!(
                out,
                "{light:?}: {} (holds {}s)",
                light.instruction(),
                light.hold_secs()
            )?;
            light = light.next();
        }
        writeln!(out, "back at {light:?}, the cycle is closed")?;
        Ok(())
    }
}

// --- Strategy ---

trait ShippingStrategy {
    fn strategy_name(&self) -> &'static str;
    fn quote_cents(&self, weight_kg: f64, distance_km: u32) -> u64;
}

struct FlatRate;
struct PerKilometer;
struct Express;

impl ShippingStrategy for FlatRate {
    fn strategy_name(&self) -> &'static str {
        "flat rate"
    }
    fn quote_cents(&self, _weight_kg: f64, _distance_km: u32) -> u64 {
        799
    }
}

impl ShippingStrategy for PerKilometer {
    fn strategy_name(&self) -> &'static str {
        "per kilometer"
    }
    fn quote_cents(&self, weight_kg: f64, distance_km: u32) -> u64 {
        (weight_kg * 0.4 * distance_km as f64).round() as u64
    }
}

impl ShippingStrategy for Express {
    fn strategy_name(&self) -> &'static str {
        "express"
    }
    fn quote_cents(&self, weight_kg: f64, distance_km: u32) -> u64 {
        1500 + (weight_kg * 0.2 * distance_km as f64).round() as u64
    }
}

pub struct StrategyDemo;

impl PatternDemo for StrategyDemo {
    fn name(&self) -> &str {
        "Strategy"
    }

    fn description(&self) -> &str {
        "Interchangeable shipping cost formulas behind one interface."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let strategies: [&dyn ShippingStrategy; 3] = [&FlatRate, &PerKilometer, &Express];
        let (weight_kg, distance_km) = (2.4, 310);

        writeln!(out, "Quoting a {weight_kg} kg parcel over {distance_km} km:")?;
        let mut best: Option<(&'static str, u64)> = None;
        for strategy in strategies {
            let quote = strategy.quote_cents(weight_kg, distance_km);
            writeln!(out, "  {:<14} {quote} cents", strategy.strategy_name())?;
            if best.map_or(true, |(_, cheapest)| quote < cheapest) {
                best = Some((strategy.strategy_name(), quote));
            }
        }
        if let Some((name, quote)) = best {
            writeln!(out, "cheapest: {name} at {quote} cents")?;
        }
        Ok(())
    }
}

// --- Template Method ---

trait ReportExporter {
    fn format_name(&self) -> &'static str;
    fn header(&self) -> String;
    fn row(&self, item: &str, count: u32) -> String;
    fn footer(&self) -> String;

    /// The template: fixed skeleton, overridable steps.
    fn export(&self, rows: &[(&str, u32)], out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} export:", self.format_name())?;
        writeln!(out, "  {}", self.header())?;
        for (item, count) in rows {
            writeln!(out, "  {}", self.row(item, *count))?;
        }
        writeln!(out, "  {}", self.footer())?;
        Ok(())
    }
}

struct CsvExporter;
struct MarkdownExporter;

impl ReportExporter for CsvExporter {
    fn format_name(&self) -> &'static str {
        "CSV"
    }
    fn header(&self) -> String {
        "item,count".to_string()
    }
    fn row(&self, item: &str, count: u32) -> String {
        format!("{item},{count}")
    }
    fn footer(&self) -> String {
        "# end of report".to_string()
    }
}

impl ReportExporter for MarkdownExporter {
    fn format_name(&self) -> &'static str {
        "Markdown"
    }
    fn header(&self) -> String {
        "| item | count |".to_string()
    }
    fn row(&self, item: &str, count: u32) -> String {
        format!("| {item} | {count} |")
    }
    fn footer(&self) -> String {
        "_generated by the gallery_".to_string()
    }
}

pub struct TemplateMethodDemo;

impl PatternDemo for TemplateMethodDemo {
    fn name(&self) -> &str {
        "Template Method"
    }

    fn description(&self) -> &str {
        "One export skeleton, with each format overriding only the steps it must."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let rows = [("apples", 12), ("pears", 7)];
        CsvExporter.export(&rows, out)?;
        MarkdownExporter.export(&rows, out)?;
        Ok(())
    }
}

// --- Visitor ---

enum Shape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
    Triangle { a: f64, b: f64, c: f64 },
}

trait ShapeVisitor {
    fn visit_circle(&self, radius: f64) -> String;
    fn visit_rect(&self, width: f64, height: f64) -> String;
    fn visit_triangle(&self, a: f64, b: f64, c: f64) -> String;
}

impl Shape {
    fn accept(&self, visitor: &dyn ShapeVisitor) -> String {
        match *self {
            Shape::Circle { radius } => visitor.visit_circle(radius),
            Shape::Rect { width, height } => visitor.visit_rect(width, height),
            Shape::Triangle { a, b, c } => visitor.visit_triangle(a, b, c),
        }
    }
}

struct AreaVisitor;
struct PerimeterVisitor;

impl ShapeVisitor for AreaVisitor {
    fn visit_circle(&self, radius: f64) -> String {
        format!("circle area {:.2}", std::f64::consts::PI * radius * radius)
    }
    fn visit_rect(&self, width: f64, height: f64) -> String {
        format!("rect area {:.2}", width * height)
    }
    fn visit_triangle(&self, a: f64, b: f64, c: f64) -> String {
        let s = (a + b + c) / 2.0;
        format!("triangle area {:.2}", (s * (s - a) * (s - b) * (s - c)).sqrt())
    }
}

impl ShapeVisitor for PerimeterVisitor {
    fn visit_circle(&self, radius: f64) -> String {
        format!("circle perimeter {:.2}", 2.0 * std::f64::consts::PI * radius)
    }
    fn visit_rect(&self, width: f64, height: f64) -> String {
        format!("rect perimeter {:.2}", 2.0 * (width + height))
    }
    fn visit_triangle(&self, a: f64, b: f64, c: f64) -> String {
        format!("triangle perimeter {:.2}", a + b + c)
    }
}

pub struct VisitorDemo;

impl PatternDemo for VisitorDemo {
    fn name(&self) -> &str {
        "Visitor"
    }

    fn description(&self) -> &str {
        "Adds area and perimeter operations to shapes without touching them."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let shapes = [
            Shape::Circle { radius: 2.0 },
            Shape::Rect { width: 3.0, height: 4.5 },
            Shape::Triangle { a: 3.0, b: 4.0, c: 5.0 },
        ];

        for visitor in [&AreaVisitor as &dyn ShapeVisitor, &PerimeterVisitor] {
            for shape in &shapes {
                writeln!(out, "{}", shape.accept(visitor))?;
            }
        }
        Ok(())
    }
}
