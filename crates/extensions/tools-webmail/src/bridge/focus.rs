//! Tab focus and tab creation.

use tracing::info;

use super::ChromeBridge;
use crate::applescript::escape_applescript_string;
use crate::error::BridgeError;

/// What [`ChromeBridge::ensure_focused`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// The active tab already matched.
    AlreadyActive,
    /// An existing tab was brought to the front.
    Reused,
    /// No tab matched; a new one was opened.
    Opened,
}

impl FocusOutcome {
    fn from_output(output: &str) -> Option<Self> {
        match output.trim() {
            "active" => Some(Self::AlreadyActive),
            "reused" => Some(Self::Reused),
            "opened" => Some(Self::Opened),
            _ => None,
        }
    }
}

impl ChromeBridge {
    /// Bring a tab whose URL contains `host_match` to the front, opening
    /// `target_url` in a new tab of the front window when none exists.
    ///
    /// A window is created first when the browser has none.
    pub async fn ensure_focused(
        &self,
        target_url: &str,
        host_match: &str,
    ) -> Result<FocusOutcome, BridgeError> {
        let script = focus_script(self.application(), target_url, host_match);
        let output = self.run_applescript(&script).await?;

        let outcome = FocusOutcome::from_output(&output).ok_or_else(|| {
            BridgeError::MalformedResult(format!("unexpected focus result: {:?}", output))
        })?;
        info!(?outcome, host = host_match, "Focused tab");
        Ok(outcome)
    }

    /// Open `url` in a new tab of the front window and activate the browser.
    pub async fn open_new_tab(&self, url: &str) -> Result<(), BridgeError> {
        let script = new_tab_script(self.application(), url);
        self.run_applescript(&script).await?;
        info!(url, "Opened new tab");
        Ok(())
    }
}

pub(super) fn focus_script(application: &str, target_url: &str, host_match: &str) -> String {
    let app = escape_applescript_string(application);
    let url = escape_applescript_string(target_url);
    let host = escape_applescript_string(host_match);

    format!(
        r#"tell application "{app}"
    if (count of windows) = 0 then
        make new window
    end if
    set frontWindow to front window
    set activeMatches to false
    try
        set activeUrl to URL of active tab of frontWindow
        if activeUrl contains "{host}" then set activeMatches to true
    end try
    if activeMatches then
        activate
        return "active"
    end if
    set foundWindow to missing value
    set foundTabIndex to 0
    repeat with windowIndex from 1 to (count of windows)
        set currentWindow to window windowIndex
        repeat with tabIndex from 1 to (count of tabs of currentWindow)
            try
                set tabUrl to URL of tab tabIndex of currentWindow
            on error
                set tabUrl to ""
            end try
            if tabUrl contains "{host}" then
                set foundWindow to currentWindow
                set foundTabIndex to tabIndex
                exit repeat
            end if
        end repeat
        if foundWindow is not missing value then exit repeat
    end repeat
    if foundWindow is missing value then
        tell frontWindow
            make new tab with properties {{URL:"{url}"}}
            set active tab index to (count of tabs)
        end tell
        activate
        return "opened"
    end if
    set index of foundWindow to 1
    set active tab index of foundWindow to foundTabIndex
    activate
    return "reused"
end tell"#
    )
}

fn new_tab_script(application: &str, url: &str) -> String {
    let app = escape_applescript_string(application);
    let url = escape_applescript_string(url);

    format!(
        r#"tell application "{app}"
    if (count of windows) = 0 then
        make new window
    end if
    tell front window
        make new tab with properties {{URL:"{url}"}}
        set active tab index to (count of tabs)
    end tell
    activate
end tell"#
    )
}
