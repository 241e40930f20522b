//! Mock collaborators for pipeline testing
//!
//! Scripted scanner and enhancer with call counters, so tests can assert the
//! cache short-circuit and branch behavior without real collaborators.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::detect::{AuthComponent, DetectionMethod, Enhancement, Enhancer, PageScan, PageScanner};
use crate::error::ScanError;

type ScanErrorFactory = Box<dyn Fn() -> ScanError + Send + Sync>;

/// Scripted page scanner.
///
/// Returns the configured scan on every call, or a freshly built error when
/// configured with a failure. Counts invocations for cache assertions.
pub struct MockScanner {
    scan: Mutex<Option<PageScan>>,
    error: Mutex<Option<ScanErrorFactory>>,
    calls: AtomicUsize,
}

impl MockScanner {
    pub fn new() -> Self {
        Self {
            scan: Mutex::new(None),
            error: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_scan(self, scan: PageScan) -> Self {
        *self.scan.lock().unwrap() = Some(scan);
        self
    }

    pub fn with_error<F>(self, factory: F) -> Self
    where
        F: Fn() -> ScanError + Send + Sync + 'static,
    {
        *self.error.lock().unwrap() = Some(Box::new(factory));
        self
    }

    pub fn scan_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageScanner for MockScanner {
    async fn scan(&self, url: &str) -> Result<PageScan, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(factory) = self.error.lock().unwrap().as_ref() {
            return Err(factory());
        }

        let scan = self
            .scan
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| PageScan {
                url: url.to_string(),
                components: vec![],
                ai_analysis: String::new(),
                captcha_detected: false,
                error: None,
            });

        Ok(scan)
    }
}

/// Scripted enhancer.
///
/// Yields `static_enhanced` with the configured analysis, or degrades with
/// the configured failure text, mirroring the real adapter's contract.
pub struct MockEnhancer {
    analysis: Mutex<String>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockEnhancer {
    pub fn new() -> Self {
        Self {
            analysis: Mutex::new(String::new()),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_analysis(self, analysis: &str) -> Self {
        *self.analysis.lock().unwrap() = analysis.to_string();
        self
    }

    pub fn with_failure(self, description: &str) -> Self {
        *self.failure.lock().unwrap() = Some(description.to_string());
        self
    }

    pub fn enhance_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Enhancer for MockEnhancer {
    async fn enhance(&self, _url: &str, _components: &[AuthComponent]) -> Enhancement {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(description) = self.failure.lock().unwrap().as_ref() {
            return Enhancement {
                analysis: format!("Validation error: {}", description),
                method: DetectionMethod::StaticOnly,
            };
        }

        Enhancement {
            analysis: self.analysis.lock().unwrap().clone(),
            method: DetectionMethod::StaticEnhanced,
        }
    }
}
