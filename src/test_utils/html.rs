use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).into_owned()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The display IDs of the rows in the expense table, top to bottom.
pub(crate) fn table_row_ids(html: &Html) -> Vec<String> {
    html.select(&Selector::parse("#expense-table tbody tr[data-expense-id]").unwrap())
        .filter_map(|row| row.value().attr("data-expense-id"))
        .map(str::to_owned)
        .collect()
}
