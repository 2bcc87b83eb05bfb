//! Integration tests for capreg-core, through the public API only.

use std::sync::{Arc, Mutex};

use capreg_core::prelude::*;
use serde_json::json;

struct Rectangle;

impl Provider<AreaCalculation> for Rectangle {
    fn execute(&self, d: Dimensions) -> Result<f64, ProviderError> {
        Ok(d.require("width")? * d.require("height")?)
    }
}

struct Circle;

impl Provider<AreaCalculation> for Circle {
    fn execute(&self, d: Dimensions) -> Result<f64, ProviderError> {
        let r = d.require("radius")?;
        Ok(std::f64::consts::PI * r * r)
    }
}

/// Serves two capabilities from one instance.
#[derive(Default)]
struct Office {
    printed: Mutex<u32>,
}

impl Provider<Printing> for Office {
    fn execute(&self, doc: Document) -> Result<PrintJob, ProviderError> {
        *self.printed.lock().unwrap() += 1;
        Ok(PrintJob::new("office", &doc))
    }
}

impl Provider<Scanning> for Office {
    fn execute(&self, req: ScanRequest) -> Result<Document, ProviderError> {
        Ok(Document::new(req.label, "scanned"))
    }
}

fn shapes() -> CapabilityRegistry {
    CapabilityRegistry::builder()
        .provider::<AreaCalculation>("rectangle", Rectangle)
        .provider::<AreaCalculation>("circle", Circle)
        .build()
        .unwrap()
}

#[test]
fn test_area_dispatch_end_to_end() {
    let registry = shapes();

    let rect = registry
        .invoke::<AreaCalculation>(
            "rectangle",
            Dimensions::new().with("width", 5.0).with("height", 10.0),
        )
        .unwrap();
    assert_eq!(rect, 50.0);

    let circle = registry
        .invoke::<AreaCalculation>("circle", Dimensions::new().with("radius", 7.0))
        .unwrap();
    assert!((circle - 153.938).abs() < 1e-3);
}

#[test]
fn test_adding_provider_leaves_call_sites_alone() {
    let registry = shapes();
    let service = AreaService::new(registry.clone());
    let rect = Shape::new(
        Discriminator::new("rectangle"),
        Dimensions::new().with("width", 5.0).with("height", 10.0),
    );

    let before = service.area(&rect).unwrap();

    registry
        .register::<AreaCalculation>(
            "triangle",
            provider_fn::<AreaCalculation, _>(|d: Dimensions| {
                Ok(0.5 * d.require("base")? * d.require("height")?)
            }),
        )
        .unwrap();

    assert_eq!(service.area(&rect).unwrap(), before);
    let tri = Shape::new(
        Discriminator::new("triangle"),
        Dimensions::new().with("base", 4.0).with("height", 3.0),
    );
    assert_eq!(service.area(&tri).unwrap(), 6.0);
}

#[test]
fn test_one_instance_serves_two_capabilities() {
    let office: Arc<Office> = Arc::new(Office::default());
    let registry = CapabilityRegistry::strict();
    registry.define::<Printing>().unwrap();
    registry.define::<Scanning>().unwrap();

    registry
        .register_shared::<Printing>("office", office.clone())
        .unwrap();
    registry
        .register_shared::<Scanning>("office", office.clone())
        .unwrap();

    let service = PrintService::new(registry, "office");
    service.print(Document::new("Memo", "body")).unwrap();
    let scanned = service.scan(ScanRequest::new("receipt", 1)).unwrap();

    assert_eq!(*office.printed.lock().unwrap(), 1);
    assert_eq!(scanned.title, "receipt");
}

#[test]
fn test_record_and_log_services_share_registry() {
    let store = Arc::new(Mutex::new(Vec::<Record>::new()));
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let (s, l) = (store.clone(), lines.clone());

    let registry = CapabilityRegistry::builder()
        .provider::<Persistence>(
            "memory",
            provider_fn::<Persistence, _>(move |r: Record| {
                s.lock().unwrap().push(r);
                Ok(())
            }),
        )
        .provider::<Logging>(
            "memory",
            provider_fn::<Logging, _>(move |e: LogEntry| {
                l.lock().unwrap().push(e.require_message()?.to_string());
                Ok(())
            }),
        )
        .build()
        .unwrap();

    let records = RecordService::new(registry.clone(), "memory");
    let log = LogService::new(registry, "memory");

    records.save(Record::new("k1", json!({"n": 1}))).unwrap();
    log.info("saved k1").unwrap();

    assert_eq!(store.lock().unwrap()[0].key, "k1");
    assert_eq!(lines.lock().unwrap().as_slice(), ["saved k1"]);
}

#[test]
fn test_errors_carry_suggestions() {
    let registry = shapes();
    let err = registry
        .invoke::<AreaCalculation>("hexagon", Dimensions::new())
        .unwrap_err();

    assert!(err.is_wiring_error());
    assert!(err.suggestions().iter().any(|s| s.contains("capreg list")));
}
