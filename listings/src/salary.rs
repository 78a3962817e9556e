use rand::Rng;

/// Display salary bands attached to scraped listings. Salary is never
/// extracted from the page; each record samples one of these at read time.
pub const SALARY_BANDS: [&str; 4] = [
    "₹6–12 LPA",
    "₹10–18 LPA",
    "$90,000/yr",
    "Not Disclosed",
];

/// Picks one band uniformly, independently per call.
pub fn pick_salary<R: Rng>(rng: &mut R) -> String {
    SALARY_BANDS[rng.gen_range(0..SALARY_BANDS.len())].to_string()
}
