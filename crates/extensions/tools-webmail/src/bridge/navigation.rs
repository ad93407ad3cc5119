//! History and scroll primitives on the active tab.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ChromeBridge;
use crate::error::BridgeError;

const GO_BACK_JS: &str = "(() => { window.history.back(); return 'back'; })()";
const GO_FORWARD_JS: &str = "(() => { window.history.forward(); return 'forward'; })()";

/// Vertical scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

impl ScrollDirection {
    fn signed(self, amount: u32) -> i64 {
        match self {
            ScrollDirection::Up => -i64::from(amount),
            ScrollDirection::Down => i64::from(amount),
        }
    }
}

impl ChromeBridge {
    /// Navigate the active tab one step back in history.
    pub async fn go_back(&self) -> Result<(), BridgeError> {
        self.execute(GO_BACK_JS).await?;
        debug!("History back");
        Ok(())
    }

    /// Navigate the active tab one step forward in history.
    pub async fn go_forward(&self) -> Result<(), BridgeError> {
        self.execute(GO_FORWARD_JS).await?;
        debug!("History forward");
        Ok(())
    }

    /// Scroll the active tab and return the resulting vertical offset.
    pub async fn scroll(&self, direction: ScrollDirection, amount: u32) -> Result<f64, BridgeError> {
        let js = scroll_script(direction, amount);
        let output = self.execute(&js).await?;
        output.trim().parse::<f64>().map_err(|_| {
            BridgeError::MalformedResult(format!("scroll offset was not a number: {:?}", output))
        })
    }
}

fn scroll_script(direction: ScrollDirection, amount: u32) -> String {
    format!(
        "(() => {{ window.scrollBy(0, {}); return String(window.scrollY); }})()",
        direction.signed(amount)
    )
}
