//! The five creational pattern demos.

use std::fmt;
use std::io::Write;

use crate::catalog::PatternDemo;
use crate::Result;

// --- Abstract Factory ---

trait WidgetFactory {
    fn theme(&self) -> &'static str;
    fn button(&self) -> String;
    fn checkbox(&self) -> String;
}

struct DarkFactory;
struct LightFactory;

impl WidgetFactory for DarkFactory {
    fn theme(&self) -> &'static str {
        "dark"
    }
    fn button(&self) -> String {
        "[button: white text on charcoal]".to_string()
    }
    fn checkbox(&self) -> String {
        "[checkbox: amber tick on slate]".to_string()
    }
}

impl WidgetFactory for LightFactory {
    fn theme(&self) -> &'static str {
        "light"
    }
    fn button(&self) -> String {
        "[button: black text on ivory]".to_string()
    }
    fn checkbox(&self) -> String {
        "[checkbox: blue tick on white]".to_string()
    }
}

pub struct AbstractFactoryDemo;

impl PatternDemo for AbstractFactoryDemo {
    fn name(&self) -> &str {
        "Abstract Factory"
    }

    fn description(&self) -> &str {
        "Produces families of themed widgets without naming their concrete types."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let factories: [&dyn WidgetFactory; 2] = [&DarkFactory, &LightFactory];
        for factory in factories {
            writeln!(out, "Rendering the {} theme family:", factory.theme())?;
            writeln!(out, "  {}", factory.button())?;
            writeln!(out, "  {}", factory.checkbox())?;
        }
        writeln!(
            out,
            "The caller only ever saw the WidgetFactory interface."
        )?;
        Ok(())
    }
}

// --- Builder ---

struct Computer {
    cpu: String,
    ram_gb: u32,
    storage_gb: u32,
    gpu: Option<String>,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} GB RAM / {} GB SSD / {}",
            self.cpu,
            self.ram_gb,
            self.storage_gb,
            self.gpu.as_deref().unwrap_or("integrated graphics")
        )
    }
}

#[derive(Default)]
struct ComputerBuilder {
    cpu: Option<String>,
    ram_gb: u32,
    storage_gb: u32,
    gpu: Option<String>,
}

impl ComputerBuilder {
    fn cpu(mut self, cpu: &str) -> Self {
        self.cpu = Some(cpu.to_string());
        self
    }

    fn ram_gb(mut self, gb: u32) -> Self {
        self.ram_gb = gb;
        self
    }

    fn storage_gb(mut self, gb: u32) -> Self {
        self.storage_gb = gb;
        self
    }

    fn gpu(mut self, gpu: &str) -> Self {
        self.gpu = Some(gpu.to_string());
        self
    }

    fn build(self) -> Computer {
        Computer {
            cpu: self.cpu.unwrap_or_else(|| "stock 4-core".to_string()),
            ram_gb: if self.ram_gb == 0 { 8 } else { self.ram_gb },
            storage_gb: if self.storage_gb == 0 { 256 } else { self.storage_gb },
            gpu: self.gpu,
        }
    }
}

pub struct BuilderDemo;

impl PatternDemo for BuilderDemo {
    fn name(&self) -> &str {
        "Builder"
    }

    fn description(&self) -> &str {
        "Assembles complex objects step by step through a fluent builder."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let office = ComputerBuilder::default().cpu("6-core").ram_gb(16).build();
        writeln!(out, "Office build:  {office}")?;

        let gaming = ComputerBuilder::default()
            .cpu("8-core")
            .ram_gb(32)
            .storage_gb(2048)
            .gpu("discrete 12 GB")
            .build();
        writeln!(out, "Gaming build:  {gaming}")?;

        writeln!(out, "Unset steps fall back to defaults at build() time.")?;
        Ok(())
    }
}

// --- Factory Method ---

trait PaymentProcessor {
    fn label(&self) -> &'static str;
    fn charge(&self, cents: u64) -> String;
}

struct CreditCard;
struct PayPal;
struct BankTransfer;

impl PaymentProcessor for CreditCard {
    fn label(&self) -> &'static str {
        "credit card"
    }
    fn charge(&self, cents: u64) -> String {
        format!("authorized {cents} cents, capture scheduled tonight")
    }
}

impl PaymentProcessor for PayPal {
    fn label(&self) -> &'static str {
        "PayPal"
    }
    fn charge(&self, cents: u64) -> String {
        format!("redirected for {cents} cents, awaiting IPN callback")
    }
}

impl PaymentProcessor for BankTransfer {
    fn label(&self) -> &'static str {
        "bank transfer"
    }
    fn charge(&self, cents: u64) -> String {
        format!("SEPA order for {cents} cents, settles in 1-2 days")
    }
}

fn processor_for(method: &str) -> Option<Box<dyn PaymentProcessor>> {
    match method {
        "credit-card" => Some(Box::new(CreditCard)),
        "paypal" => Some(Box::new(PayPal)),
        "bank-transfer" => Some(Box::new(BankTransfer)),
        _ => None,
    }
}

pub struct FactoryMethodDemo;

impl PatternDemo for FactoryMethodDemo {
    fn name(&self) -> &str {
        "Factory Method"
    }

    fn description(&self) -> &str {
        "Lets a creator pick the concrete payment processor for each order."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        for method in ["credit-card", "paypal", "bank-transfer", "carrier-pigeon"] {
            match processor_for(method) {
                Some(processor) => writeln!(
                    out,
                    "Order via {}: {}",
                    processor.label(),
                    processor.charge(2499)
                )?,
                None => writeln!(out, "Order via {method}: no processor registered")?,
            }
        }
        Ok(())
    }
}

// --- Prototype ---

#[derive(Clone)]
struct ShapePrototype {
    kind: &'static str,
    width: u32,
    height: u32,
    fill: String,
}

impl fmt::Display for ShapePrototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} filled {}",
            self.kind, self.width, self.height, self.fill
        )
    }
}

pub struct PrototypeDemo;

impl PatternDemo for PrototypeDemo {
    fn name(&self) -> &str {
        "Prototype"
    }

    fn description(&self) -> &str {
        "Creates new objects by cloning a configured prototype."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let prototype = ShapePrototype {
            kind: "rectangle",
            width: 40,
            height: 20,
            fill: "teal".to_string(),
        };
        writeln!(out, "Prototype: {prototype}")?;

        let mut copy = prototype.clone();
        copy.fill = "coral".to_string();
        copy.width = 80;
        writeln!(out, "Clone:     {copy}")?;
        writeln!(out, "Original:  {prototype} (untouched by the clone's edits)")?;
        Ok(())
    }
}

// --- Singleton ---

/// The "singleton" here is an explicit context object: constructed once,
/// then lent to whoever needs it, instead of hiding behind a process-wide
/// global.
struct AuditLog {
    entries: Vec<String>,
}

impl AuditLog {
    fn new() -> Self {
        AuditLog { entries: Vec::new() }
    }

    fn record(&mut self, who: &str, what: &str) {
        self.entries.push(format!("{who}: {what}"));
    }
}

fn billing_service(log: &mut AuditLog) {
    log.record("billing", "invoice #1042 issued");
}

fn shipping_service(log: &mut AuditLog) {
    log.record("shipping", "parcel handed to courier");
}

pub struct SingletonDemo;

impl PatternDemo for SingletonDemo {
    fn name(&self) -> &str {
        "Singleton"
    }

    fn description(&self) -> &str {
        "One shared instance with an explicit owner, passed by reference instead of a global."
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut log = AuditLog::new();
        billing_service(&mut log);
        shipping_service(&mut log);

        writeln!(out, "Both services wrote to the same AuditLog instance:")?;
        for entry in &log.entries {
            writeln!(out, "  {entry}")?;
        }
        writeln!(
            out,
            "Ownership stays visible; nothing reaches for hidden global state."
        )?;
        Ok(())
    }
}
