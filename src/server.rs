use crate::assess;
use crate::types::assessment::Assessment;
use crate::types::config::RepoLensConfig;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::{Response, StatusCode};
use warp::Filter;

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
  <title>RepoLens</title>
  <style>
    body { font-family: sans-serif; background: #0d0618; color: #eae6f5;
           display: flex; justify-content: center; align-items: center;
           height: 100vh; margin: 0; }
    main { background: #1a0f2e; padding: 28px; max-width: 720px; width: 90%;
           border-radius: 14px; text-align: center; }
    input { width: 80%; padding: 12px; margin-bottom: 12px; border: none;
            border-radius: 8px; background: #2a1b45; color: #fff; }
    button { padding: 12px 24px; border: none; border-radius: 8px;
             background: #6a5acd; color: #fff; cursor: pointer; }
  </style>
</head>
<body>
  <main>
    <h1>RepoLens</h1>
    <p>Paste a repository URL to get a quality score and an improvement roadmap.</p>
    <form method="post" action="/analyze">
      <input name="repo_url" placeholder="https://github.com/user/repo" required>
      <br>
      <button>Analyze</button>
    </form>
  </main>
</body>
</html>
"#;

pub async fn serve(config: RepoLensConfig, port: u16) {
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    tracing::info!(%addr, "repolens listening");
    warp::serve(routes(Arc::new(config))).run(addr).await;
}

pub fn routes(
    config: Arc<RepoLensConfig>,
) -> impl Filter<Extract = (Response<String>,), Error = warp::Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .map(|| html_response(StatusCode::OK, INDEX_HTML.to_string()));

    let with_config = warp::any().map(move || Arc::clone(&config));
    let analyze = warp::path("analyze")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_config)
        .and(warp::body::form::<HashMap<String, String>>())
        .and_then(handle_analyze);

    index.or(analyze).unify()
}

async fn handle_analyze(
    config: Arc<RepoLensConfig>,
    form: HashMap<String, String>,
) -> Result<Response<String>, warp::Rejection> {
    let Some(url) = form
        .get("repo_url")
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
    else {
        return Ok(text_response(
            StatusCode::BAD_REQUEST,
            "missing repo_url".to_string(),
        ));
    };

    let task = {
        let config = Arc::clone(&config);
        let url = url.clone();
        tokio::task::spawn_blocking(move || assess::assess(&url, &config))
    };

    match task.await {
        Ok(Ok(assessment)) => Ok(html_response(StatusCode::OK, result_page(&assessment))),
        Ok(Err(err)) => {
            tracing::error!(error = %err, url = %url, "assessment failed");
            Ok(text_response(
                StatusCode::BAD_GATEWAY,
                format!("assessment failed: {err}"),
            ))
        }
        Err(err) => {
            tracing::error!(error = %err, url = %url, "assessment task aborted");
            Ok(text_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "assessment failed".to_string(),
            ))
        }
    }
}

fn result_page(assessment: &Assessment) -> String {
    let items = assessment
        .roadmap
        .iter()
        .map(|entry| format!("      <li>{}</li>\n", escape_html(entry)))
        .collect::<String>();

    format!(
        r#"<!doctype html>
<html>
<head>
  <title>RepoLens Result</title>
  <style>
    body {{ font-family: sans-serif; background: #1a0b2e; color: #fff; padding: 40px; }}
    main {{ background: #2e1a4f; padding: 24px; max-width: 900px; margin: auto;
            border-radius: 12px; }}
    ul {{ line-height: 1.8; }}
    a {{ color: #c9c4ff; }}
  </style>
</head>
<body>
  <main>
    <h1>Score: {score} / 100</h1>
    <p><b>Summary:</b> {summary}</p>
    <h2>Roadmap</h2>
    <ul>
{items}    </ul>
    <a href="/">Analyze another repository</a>
  </main>
</body>
</html>
"#,
        score = assessment.score,
        summary = escape_html(&assessment.summary),
        items = items,
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn html_response(status: StatusCode, body: String) -> Response<String> {
    response_with_type(status, "text/html; charset=utf-8", body)
}

fn text_response(status: StatusCode, body: String) -> Response<String> {
    response_with_type(status, "text/plain; charset=utf-8", body)
}

fn response_with_type(status: StatusCode, content_type: &str, body: String) -> Response<String> {
    Response::builder()
        .status(status)
        .header("content-type", content_type)
        .body(body)
        .unwrap_or_else(|_| Response::new(String::new()))
}
