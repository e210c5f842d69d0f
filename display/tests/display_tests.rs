//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Building lines and sending them to a configured display

use hudline_display::{
    DisplayConfig, DisplayExt, DisplayFormat, LineBuilder, RecordingDisplay, configure,
    Display,
};
use std::time::Duration;

#[test]
fn test_configure_then_send_frame() {
    let mut display = RecordingDisplay::new();
    let applied = configure(
        &mut display,
        &DisplayConfig::default().with_transmission_interval(Duration::from_millis(100)),
    );
    assert_eq!(applied.format, DisplayFormat::Markup);

    let mut title = LineBuilder::new();
    title.big().bold().append("Autonomous").unwrap().clear_styles();
    display.add_builder_line(&mut title);

    let mut arm = LineBuilder::new();
    arm.start_data("Arm", "12.50").unwrap().white().lime();
    display.add_builder_line(&mut arm);

    display.update();

    let frame = &display.frames()[0];
    assert_eq!(frame.len(), 2);
    assert_eq!(frame[0], "<big><b>Autonomous</b></big>");
    assert!(frame[1].contains("Arm"));
    assert!(frame[1].contains("12.50"));
    assert_eq!(display.transmission_interval(), Duration::from_millis(100));
}

#[test]
fn test_one_builder_per_line() {
    let mut display = RecordingDisplay::new();
    for value in [0.0, 50.0, 100.0] {
        let mut builder = LineBuilder::new();
        builder
            .start_progress_bar(0.0, 100.0, value)
            .unwrap()
            .green()
            .gray();
        display.add_builder_line(&mut builder);
    }
    display.update();
    let frame = &display.frames()[0];
    assert!(frame[0].ends_with("0.00%</span>"));
    assert!(frame[1].ends_with("50.00%</span>"));
    assert!(frame[2].ends_with("100.00%</span>"));
}
