use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// SplitMix64: seeded and reproducible, so every run writes the same file.
struct SampleRng {
    counter: u64,
}

impl SampleRng {
    fn seeded(seed: u64) -> Self {
        SampleRng { counter: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.counter;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

/// Salary cells as a scraped export would hold them: mostly whole numbers,
/// sometimes blank or free text, occasionally an inverted range.
fn salary_cells(rng: &mut SampleRng) -> (String, String) {
    let low = 20_000 + rng.below(80) * 1_000;
    let high = low + 5_000 + rng.below(60) * 1_000;
    match rng.below(20) {
        0 => (String::new(), high.to_string()),
        1 => (low.to_string(), String::new()),
        2 => ("negotiable".to_string(), "negotiable".to_string()),
        3 => (high.to_string(), low.to_string()),
        _ => (low.to_string(), high.to_string()),
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng::seeded(42);

    let titles = ["Data Analyst", "Backend Engineer", "Nurse", "Accountant", "Designer"];
    let companies = ["Acme", "Globex", "Initech", "Umbrella"];
    let job_types = ["FULL_TIME", "PART_TIME", "CONTRACTOR", "INTERN", "TEMPORARY", "OTHER"];
    let industries = ["Finance", "Healthcare", "Information Technology", "Retail", ""];

    let n_rows: i64 = 200;

    let mut ids = Vec::new();
    let mut all_title = Vec::new();
    let mut all_company = Vec::new();
    let mut all_job_type = Vec::new();
    let mut all_industry = Vec::new();
    let mut all_min = Vec::new();
    let mut all_max = Vec::new();

    for id in 0..n_rows {
        let (min, max) = salary_cells(&mut rng);
        ids.push(id);
        all_title.push(rng.pick(&titles));
        all_company.push(rng.pick(&companies));
        all_job_type.push(rng.pick(&job_types));
        all_industry.push(rng.pick(&industries));
        all_min.push(min);
        all_max.push(max);
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("job_title", DataType::Utf8, false),
        Field::new("company", DataType::Utf8, false),
        Field::new("job_type", DataType::Utf8, false),
        Field::new("industry", DataType::Utf8, false),
        Field::new("min_salary", DataType::Utf8, false),
        Field::new("max_salary", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(StringArray::from(all_title)),
            Arc::new(StringArray::from(all_company)),
            Arc::new(StringArray::from(all_job_type)),
            Arc::new(StringArray::from(all_industry)),
            Arc::new(StringArray::from(all_min)),
            Arc::new(StringArray::from(all_max)),
        ],
    )
    .context("creating record batch")?;

    // Write Parquet
    let output_path = "sample_jobs.parquet";
    let file = std::fs::File::create(output_path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;

    println!("Wrote {n_rows} job listings to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SampleRng::seeded(42);
        let mut b = SampleRng::seeded(42);
        let mut c = SampleRng::seeded(7);
        let first: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let second: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        let other: Vec<u64> = (0..8).map(|_| c.next_u64()).collect();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn salary_cells_are_text_the_loader_accepts() {
        let mut rng = SampleRng::seeded(1);
        for _ in 0..500 {
            let (min, max) = salary_cells(&mut rng);
            for cell in [&min, &max] {
                assert!(cell.is_empty() || cell == "negotiable" || cell.parse::<u64>().is_ok());
            }
        }
    }

    #[test]
    fn pick_stays_in_bounds() {
        let mut rng = SampleRng::seeded(3);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(&rng.pick(&items)));
        }
    }
}
