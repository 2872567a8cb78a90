use anyhow::Result;
use llmcost_engine::Calculator;
use llmcost_web::WebServer;

pub async fn handle(calculator: Calculator, host: String, port: u16, open: bool) -> Result<()> {
    let url = format!("http://{}:{}", host, port);
    println!("Web form available at {}", url);

    if open {
        open_browser(&url);
    }

    WebServer::serve(calculator, &host, port).await
}

/// Best effort; the URL is already printed
fn open_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "linux")]
    let _ = std::process::Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd")
        .args(["/C", "start", url])
        .spawn();
}
