//! Status page rendering.

use crate::device::{DeviceState, fan_speed_label};

/// Renders the index status page for the current device state.
pub fn index_page(state: &DeviceState) -> String {
    let power = if state.power { "ON" } else { "OFF" };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>LevIoT</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
<h1>LevIoT Air Purifier</h1>
<p>Power: {power}</p>
<p>Fan speed: {speed}</p>
<p>Timer: {timer} min</p>
<p>
<a href="/priv-api/on">Turn on</a> |
<a href="/priv-api/off">Turn off</a>
</p>
<p>
Fan:
<a href="/priv-api/fan?speed=0">Sleep</a>
<a href="/priv-api/fan?speed=1">Low</a>
<a href="/priv-api/fan?speed=2">Medium</a>
<a href="/priv-api/fan?speed=3">High</a>
</p>
</body>
</html>
"#,
        power = power,
        speed = fan_speed_label(state.speed),
        timer = state.timer_left,
    )
}
