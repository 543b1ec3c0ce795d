//! Browser lifecycle management using Chrome DevTools Protocol

use crate::driver::PageDriver;
use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use niffy_core::{NiffyConfig, NiffyError, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Active browser session with Chrome DevTools Protocol
///
/// One session backs every navigation and screenshot of a comparison run;
/// both hosts are visited through the same tab, sequentially.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a browser sized and shown per the given configuration
    pub async fn launch(config: &NiffyConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            !config.show, config.width, config.height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(!config.show)
            .window_size(Some((config.width, config.height)))
            .build()
            .map_err(|e| NiffyError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| NiffyError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| NiffyError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self { browser, tab })
    }

    /// Connect to an existing browser instance
    ///
    /// # Arguments
    /// * `port` - Chrome DevTools Protocol port (typically 9222)
    pub async fn connect(port: u16) -> Result<Self> {
        info!("Connecting to existing browser on port {}", port);

        let browser = Browser::connect(format!("http://127.0.0.1:{}", port))
            .map_err(|e| NiffyError::Browser(format!("Failed to connect to browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| NiffyError::Browser(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Wait for an element to appear
    ///
    /// Useful inside interaction callbacks that need a widget present before
    /// acting on it.
    pub async fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<()> {
        debug!("Waiting for element: {} (timeout: {:?})", selector, timeout);

        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map_err(|_e| NiffyError::Browser(format!("Element not found: {}", selector)))?;

        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| NiffyError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get the current page title
    pub async fn title(&self) -> Result<String> {
        let result = self.evaluate_script("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get the current URL
    pub async fn url(&self) -> Result<String> {
        let result = self.evaluate_script("window.location.href").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }
}

#[async_trait]
impl PageDriver for BrowserSession {
    async fn goto(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| NiffyError::Navigation(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| NiffyError::Navigation(format!("Navigation timeout for {}: {}", url, e)))?;

        debug!("Navigated to {}", url);
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> Result<()> {
        let data = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| NiffyError::Screenshot(format!("CDP capture failed: {}", e)))?;

        std::fs::write(path, &data)?;

        debug!("Screenshot written: {} ({} bytes)", path.display(), data.len());
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        info!("Closing browser session");
        // Browser is dropped with the session and cleaned up by its own Drop
        Ok(())
    }
}
