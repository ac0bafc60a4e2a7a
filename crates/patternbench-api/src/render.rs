// The three response bodies: error page, result page, welcome form
//
// The fixed parts of the pages reproduce the original report wording; numbers
// are rendered exactly as computed, nothing reformatted.

use patternbench_core::{Case, MeasuredRun, RunConfig, MAX_MAGNITUDE, MIN_MAGNITUDE};

const ERROR_PAGE: &str = "<!doctype html>\n\
<html>\n\
<body>\n\
\n\
<h2>Fehler!</h2>\n\
<br>\n\
<p>Die Parameter 'case' und/oder 'magnitude' wurden nicht korrekt übergeben!</p>\n\
\n\
</body>\n\
</html>\n";

/// Validation failure page, served with status 200
pub fn error_page() -> &'static str {
    ERROR_PAGE
}

/// Benchmark report: elapsed milliseconds, the echoed run options, back link
pub fn result_page(config: &RunConfig, run: &MeasuredRun) -> String {
    let mut page = format!(
        "<!doctype html>\n\
         <html>\n\
         <body>\n\
         \n\
         <h2>Benchmark abgeschlossen!</h2>\n\
         <br>\n\
         <p><b>Ergebnis:</b> {} ms</p>\
         <p><b>Verwendete Optionen:</b><br>\n\
         Benchmark: {}<br>\n\
         Durchläufe: 10^{} ({})</p>\n\
         \n\
         <p>\n",
        run.millis(),
        config.case,
        config.magnitude,
        config.iterations()
    );

    if config.warmup {
        page.push_str("Warm-Up durchführen<br>\n");
    }
    if config.garbage {
        page.push_str("Garbage Collection vor dem Benchmark<br>\n");
    }
    if config.sleep {
        page.push_str("Pausiere 1 ms bei jedem Durchlauf<br>\n");
    }

    page.push_str(
        "</p>\n\
         \n\
         <a href=\"index.html\">Zurück</a><br>\n\
         <br>\n\
         <br>\n\
         <a href=\"https://www.qmethods.com\"><img src=\"https://www.qmethods.de/img/navigate/qmethods-logo-vertical.svg\"></a>\
         </body>\n\
         </html>\n",
    );

    page
}

/// Welcome form the result page links back to: case dropdown, magnitude
/// field, the three option checkboxes.
pub fn welcome_page(service_path: &str) -> String {
    let mut page = format!(
        "<!doctype html>\n\
         <html>\n\
         <body>\n\
         \n\
         <h2>Micro-Benchmark starten</h2>\n\
         <form action=\"{service_path}\" method=\"get\">\n\
         <label for=\"case\">Benchmark:</label>\n\
         <select name=\"case\" id=\"case\">\n"
    );

    for case in Case::ALL {
        page.push_str(&format!("<option value=\"{case}\">{case}</option>\n"));
    }

    page.push_str(&format!(
        "</select><br>\n\
         <label for=\"magnitude\">Magnitude [{MIN_MAGNITUDE}-{MAX_MAGNITUDE}]:</label>\n\
         <input type=\"number\" name=\"magnitude\" id=\"magnitude\" min=\"{MIN_MAGNITUDE}\" max=\"{MAX_MAGNITUDE}\" value=\"{MIN_MAGNITUDE}\"><br>\n\
         <input type=\"checkbox\" name=\"warmup\" id=\"warmup\">\n\
         <label for=\"warmup\">Warm-Up durchführen</label><br>\n\
         <input type=\"checkbox\" name=\"garbage\" id=\"garbage\">\n\
         <label for=\"garbage\">Garbage Collection vor dem Benchmark</label><br>\n\
         <input type=\"checkbox\" name=\"sleep\" id=\"sleep\">\n\
         <label for=\"sleep\">Pausiere 1 ms bei jedem Durchlauf</label><br>\n\
         <br>\n\
         <input type=\"submit\" value=\"Start\">\n\
         </form>\n\
         \n\
         </body>\n\
         </html>\n"
    ));

    page
}
