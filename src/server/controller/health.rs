/// GET /api/ping - Liveness check
///
/// # Returns
/// - `200 OK`: `root alive!` followed by a newline
pub async fn ping() -> &'static str {
    "root alive!\n"
}
