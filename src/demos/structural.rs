//! The seven structural pattern demos.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::catalog::PatternDemo;
use crate::Result;

// --- Adapter ---

trait TemperatureProbe {
    fn celsius(&self) -> f64;
}

/// Third-party gauge that only speaks Fahrenheit.
struct LegacyFahrenheitGauge {
    reading: f64,
}

impl LegacyFahrenheitGauge {
    fn read_fahrenheit(&self) -> f64 {
        self.reading
    }
}

struct GaugeAdapter {
    inner: LegacyFahrenheitGauge,
}

impl TemperatureProbe for GaugeAdapter {
    fn celsius(&self) -> f64 {
        (self.inner.read_fahrenheit() - 32.0) * 5.0 / 9.0
    }
}

pub struct AdapterDemo;

impl PatternDemo for AdapterDemo {
    fn name(&self) -> &str {
        "Adapter"
    }

    fn description(&self) -> &str {
        "Wraps a Fahrenheit-only gauge so a metric pipeline can read it."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let adapter = GaugeAdapter {
            inner: LegacyFahrenheitGauge { reading: 98.6 },
        };
        writeln!(
            out,
            "Legacy gauge reports {:.1} F",
            adapter.inner.read_fahrenheit()
        )?;
        writeln!(
            out,
            "Metric pipeline sees {:.1} C through the TemperatureProbe adapter",
            adapter.celsius()
        )?;
        Ok(())
    }
}

// --- Bridge ---

trait Device {
    fn name(&self) -> &'static str;
    fn set_power(&mut self, on: bool) -> String;
    fn set_volume(&mut self, level: u8) -> String;
}

struct Tv {
    on: bool,
}

struct Radio {
    on: bool,
}

impl Device for Tv {
    fn name(&self) -> &'static str {
        "TV"
    }
    fn set_power(&mut self, on: bool) -> String {
        self.on = on;
        format!("TV panel {}", if on { "lights up" } else { "goes dark" })
    }
    fn set_volume(&mut self, level: u8) -> String {
        if self.on {
            format!("TV speakers at {level}%")
        } else {
            "TV is off, volume ignored".to_string()
        }
    }
}

impl Device for Radio {
    fn name(&self) -> &'static str {
        "radio"
    }
    fn set_power(&mut self, on: bool) -> String {
        self.on = on;
        format!("radio {}", if on { "crackles on" } else { "falls silent" })
    }
    fn set_volume(&mut self, level: u8) -> String {
        if self.on {
            format!("radio dial turned to {level}%")
        } else {
            "radio is off, dial does nothing".to_string()
        }
    }
}

/// Abstraction side of the bridge; works with any Device implementation.
struct Remote {
    device: Box<dyn Device>,
}

impl Remote {
    fn power_on_and_set(&mut self, level: u8) -> Vec<String> {
        vec![self.device.set_power(true), self.device.set_volume(level)]
    }
}

pub struct BridgeDemo;

impl PatternDemo for BridgeDemo {
    fn name(&self) -> &str {
        "Bridge"
    }

    fn description(&self) -> &str {
        "Keeps the remote-control abstraction independent of the device it drives."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        for device in [
            Box::new(Tv { on: false }) as Box<dyn Device>,
            Box::new(Radio { on: false }),
        ] {
            let name = device.name();
            let mut remote = Remote { device };
            writeln!(out, "Same remote, {name} on the other side:")?;
            for step in remote.power_on_and_set(35) {
                writeln!(out, "  {step}")?;
            }
        }
        Ok(())
    }
}

// --- Composite ---

enum FsNode {
    File { name: &'static str, size: u64 },
    Dir { name: &'static str, children: Vec<FsNode> },
}

impl FsNode {
    fn size(&self) -> u64 {
        match self {
            FsNode::File { size, .. } => *size,
            FsNode::Dir { children, .. } => children.iter().map(FsNode::size).sum(),
        }
    }

    fn render(&self, depth: usize, out: &mut dyn Write) -> Result<()> {
        let indent = "  ".repeat(depth);
        match self {
            FsNode::File { name, size } => writeln!(out, "{indent}{name} ({size} B)")?,
            FsNode::Dir { name, children } => {
                writeln!(out, "{indent}{name}/ ({} B total)", self.size())?;
                for child in children {
                    child.render(depth + 1, out)?;
                }
            }
        }
        Ok(())
    }
}

pub struct CompositeDemo;

impl PatternDemo for CompositeDemo {
    fn name(&self) -> &str {
        "Composite"
    }

    fn description(&self) -> &str {
        "Treats files and directories uniformly when sizing a tree."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let tree = FsNode::Dir {
            name: "project",
            children: vec![
                FsNode::File { name: "Cargo.toml", size: 310 },
                FsNode::Dir {
                    name: "src",
                    children: vec![
                        FsNode::File { name: "main.rs", size: 1480 },
                        FsNode::File { name: "lib.rs", size: 260 },
                    ],
                },
            ],
        };
        tree.render(0, out)?;
        writeln!(out, "One size() call works on leaf and branch alike.")?;
        Ok(())
    }
}

// --- Decorator ---

trait Beverage {
    fn label(&self) -> String;
    fn cost_cents(&self) -> u32;
}

struct Espresso;

impl Beverage for Espresso {
    fn label(&self) -> String {
        "espresso".to_string()
    }
    fn cost_cents(&self) -> u32 {
        250
    }
}

struct Milk(Box<dyn Beverage>);
struct Mocha(Box<dyn Beverage>);
struct Whip(Box<dyn Beverage>);

impl Beverage for Milk {
    fn label(&self) -> String {
        format!("{} + milk", self.0.label())
    }
    fn cost_cents(&self) -> u32 {
        self.0.cost_cents() + 40
    }
}

impl Beverage for Mocha {
    fn label(&self) -> String {
        format!("{} + mocha", self.0.label())
    }
    fn cost_cents(&self) -> u32 {
        self.0.cost_cents() + 60
    }
}

impl Beverage for Whip {
    fn label(&self) -> String {
        format!("{} + whip", self.0.label())
    }
    fn cost_cents(&self) -> u32 {
        self.0.cost_cents() + 50
    }
}

pub struct DecoratorDemo;

impl PatternDemo for DecoratorDemo {
    fn name(&self) -> &str {
        "Decorator"
    }

    fn description(&self) -> &str {
        "Stacks coffee condiments around a base drink, each adding label and cost."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let plain = Espresso;
        writeln!(out, "{}: {} cents", plain.label(), plain.cost_cents())?;

        let fancy = Whip(Box::new(Mocha(Box::new(Milk(Box::new(Espresso))))));
        writeln!(out, "{}: {} cents", fancy.label(), fancy.cost_cents())?;
        writeln!(out, "Each wrapper delegates inward and adds its own slice.")?;
        Ok(())
    }
}

// --- Facade ---

struct Amplifier;
struct Projector;
struct Screen;

impl Amplifier {
    fn on(&self) -> &'static str {
        "amplifier humming at reference volume"
    }
    fn off(&self) -> &'static str {
        "amplifier off"
    }
}

impl Projector {
    fn wide_screen_mode(&self) -> &'static str {
        "projector in 16:9 mode"
    }
    fn off(&self) -> &'static str {
        "projector cooling down"
    }
}

impl Screen {
    fn down(&self) -> &'static str {
        "screen rolling down"
    }
    fn up(&self) -> &'static str {
        "screen rolling up"
    }
}

struct HomeTheaterFacade {
    amp: Amplifier,
    projector: Projector,
    screen: Screen,
}

impl HomeTheaterFacade {
    fn watch_movie(&self, title: &str) -> Vec<String> {
        vec![
            format!("Get ready to watch '{title}'..."),
            self.screen.down().to_string(),
            self.projector.wide_screen_mode().to_string(),
            self.amp.on().to_string(),
        ]
    }

    fn end_movie(&self) -> Vec<String> {
        vec![
            self.amp.off().to_string(),
            self.projector.off().to_string(),
            self.screen.up().to_string(),
        ]
    }
}

pub struct FacadeDemo;

impl PatternDemo for FacadeDemo {
    fn name(&self) -> &str {
        "Facade"
    }

    fn description(&self) -> &str {
        "One watch_movie() call in front of the whole home-theater subsystem."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let theater = HomeTheaterFacade {
            amp: Amplifier,
            projector: Projector,
            screen: Screen,
        };
        for step in theater.watch_movie("The Hidden Fortress") {
            writeln!(out, "{step}")?;
        }
        writeln!(out, "-- credits roll --")?;
        for step in theater.end_movie() {
            writeln!(out, "{step}")?;
        }
        Ok(())
    }
}

// --- Flyweight ---

struct TreeKind {
    species: &'static str,
    sprite: &'static str,
}

struct Tree {
    x: u32,
    y: u32,
    kind: Rc<TreeKind>,
}

fn kind_for(
    cache: &mut HashMap<&'static str, Rc<TreeKind>>,
    species: &'static str,
    sprite: &'static str,
) -> Rc<TreeKind> {
    Rc::clone(
        cache
            .entry(species)
            .or_insert_with(|| Rc::new(TreeKind { species, sprite })),
    )
}

pub struct FlyweightDemo;

impl PatternDemo for FlyweightDemo {
    fn name(&self) -> &str {
        "Flyweight"
    }

    fn description(&self) -> &str {
        "Shares heavy per-species data between thousands of light tree instances."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut cache = HashMap::new();
        let positions = [(3, 1), (9, 4), (2, 8), (7, 2), (5, 5), (1, 6)];
        let mut forest = Vec::new();
        for (i, (x, y)) in positions.into_iter().enumerate() {
            let kind = if i % 2 == 0 {
                kind_for(&mut cache, "oak", "oak.png")
            } else {
                kind_for(&mut cache, "pine", "pine.png")
            };
            forest.push(Tree { x, y, kind });
        }

        for tree in &forest {
            writeln!(
                out,
                "{} at ({}, {}) drawn from {}",
                tree.kind.species, tree.x, tree.y, tree.kind.sprite
            )?;
        }
        writeln!(
            out,
            "{} trees share {} TreeKind instances.",
            forest.len(),
            cache.len()
        )?;
        Ok(())
    }
}

// --- Proxy ---

struct RealImage {
    pixels: u32,
}

/// Stands in for the real image and defers the expensive load until the
/// first display.
struct ImageProxy {
    path: &'static str,
    cached: OnceCell<RealImage>,
}

impl ImageProxy {
    fn display(&self, out: &mut dyn Write) -> Result<()> {
        if self.cached.get().is_none() {
            writeln!(out, "proxy: first access, loading '{}' from disk (slow)", self.path)?;
        } else {
            writeln!(out, "proxy: serving '{}' from cache", self.path)?;
        }
        let real = self.cached.get_or_init(|| RealImage { pixels: 4096 });
        writeln!(out, "image displayed ({} px)", real.pixels)?;
        Ok(())
    }
}

pub struct ProxyDemo;

impl PatternDemo for ProxyDemo {
    fn name(&self) -> &str {
        "Proxy"
    }

    fn description(&self) -> &str {
        "A lazy-loading stand-in that defers the expensive image load."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let proxy = ImageProxy {
            path: "holiday.raw",
            cached: OnceCell::new(),
        };
        proxy.display(out)?;
        proxy.display(out)?;
        Ok(())
    }
}
