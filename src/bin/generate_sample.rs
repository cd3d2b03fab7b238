use std::sync::Arc;

use arrow::array::{Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [(T, f64)]) -> &'a (T, f64) {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct Row {
    year: i32,
    seniority: String,
    contract: String,
    company_size: String,
    title: String,
    remote: String,
    country_iso3: String,
    usd: f64,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Job titles with typical base salaries (USD).
    let titles: [(&str, f64); 10] = [
        ("Data Scientist", 150_000.0),
        ("Data Engineer", 145_000.0),
        ("Data Analyst", 95_000.0),
        ("Machine Learning Engineer", 165_000.0),
        ("Analytics Engineer", 135_000.0),
        ("BI Analyst", 90_000.0),
        ("Research Scientist", 175_000.0),
        ("Data Architect", 160_000.0),
        ("Business Analyst", 85_000.0),
        ("Statistician", 110_000.0),
    ];
    let seniorities: [(&str, f64); 4] = [
        ("Junior", 0.55),
        ("Mid", 0.8),
        ("Senior", 1.0),
        ("Executive", 1.5),
    ];
    let contracts: [(&str, f64); 3] = [("CLT", 1.0), ("PJ", 1.05), ("Freelance", 0.9)];
    let company_sizes: [(&str, f64); 3] = [("S", 0.85), ("M", 1.0), ("L", 1.15)];
    let remotes: [(&str, f64); 3] = [("On-site", 1.0), ("Hybrid", 1.0), ("Remote", 1.0)];
    let countries: [(&str, f64); 8] = [
        ("USA", 1.0),
        ("CAN", 0.85),
        ("GBR", 0.8),
        ("DEU", 0.75),
        ("PRT", 0.45),
        ("ESP", 0.5),
        ("BRA", 0.3),
        ("IND", 0.25),
    ];
    let years = [2021, 2022, 2023, 2024, 2025];

    let n_rows = 2_000;
    let mut rows = Vec::with_capacity(n_rows);

    for _ in 0..n_rows {
        let &(title, base) = rng.pick(&titles);
        let &(seniority, s_mult) = rng.pick(&seniorities);
        let &(contract, c_mult) = rng.pick(&contracts);
        let &(size, z_mult) = rng.pick(&company_sizes);
        let &(remote, _) = rng.pick(&remotes);
        let &(country, geo_mult) = rng.pick(&countries);
        let year = years[(rng.next_u64() % years.len() as u64) as usize];

        // Small year-on-year drift plus individual noise.
        let drift = 1.0 + 0.03 * (year - 2021) as f64;
        let noise = rng.gauss(1.0, 0.08).max(0.5);
        let usd = (base * s_mult * c_mult * z_mult * geo_mult * drift * noise * 100.0).round() / 100.0;

        rows.push(Row {
            year,
            seniority: seniority.to_string(),
            contract: contract.to_string(),
            company_size: size.to_string(),
            title: title.to_string(),
            remote: remote.to_string(),
            country_iso3: country.to_string(),
            usd,
        });
    }

    write_csv(&rows, "salaries.csv");
    write_parquet(&rows, "salaries.parquet");

    println!("Wrote {n_rows} salary records to salaries.csv and salaries.parquet");
}

fn write_csv(rows: &[Row], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "year",
            "seniority",
            "contract",
            "company_size",
            "title",
            "remote",
            "country_iso3",
            "usd",
        ])
        .expect("Failed to write CSV header");

    for row in rows {
        writer
            .write_record([
                row.year.to_string(),
                row.seniority.clone(),
                row.contract.clone(),
                row.company_size.clone(),
                row.title.clone(),
                row.remote.clone(),
                row.country_iso3.clone(),
                format!("{:.2}", row.usd),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(rows: &[Row], path: &str) {
    let year_array = Int32Array::from(rows.iter().map(|r| r.year).collect::<Vec<_>>());
    let seniority_array =
        StringArray::from(rows.iter().map(|r| r.seniority.as_str()).collect::<Vec<_>>());
    let contract_array =
        StringArray::from(rows.iter().map(|r| r.contract.as_str()).collect::<Vec<_>>());
    let size_array = StringArray::from(
        rows.iter()
            .map(|r| r.company_size.as_str())
            .collect::<Vec<_>>(),
    );
    let title_array = StringArray::from(rows.iter().map(|r| r.title.as_str()).collect::<Vec<_>>());
    let remote_array =
        StringArray::from(rows.iter().map(|r| r.remote.as_str()).collect::<Vec<_>>());
    let country_array = StringArray::from(
        rows.iter()
            .map(|r| r.country_iso3.as_str())
            .collect::<Vec<_>>(),
    );
    let usd_array = Float64Array::from(rows.iter().map(|r| r.usd).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("year", DataType::Int32, false),
        Field::new("seniority", DataType::Utf8, false),
        Field::new("contract", DataType::Utf8, false),
        Field::new("company_size", DataType::Utf8, false),
        Field::new("title", DataType::Utf8, false),
        Field::new("remote", DataType::Utf8, false),
        Field::new("country_iso3", DataType::Utf8, false),
        Field::new("usd", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(year_array),
            Arc::new(seniority_array),
            Arc::new(contract_array),
            Arc::new(size_array),
            Arc::new(title_array),
            Arc::new(remote_array),
            Arc::new(country_array),
            Arc::new(usd_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}
