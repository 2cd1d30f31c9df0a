use serde::Serialize;

use meterops_records::DemandRecord;

/// Per-category arithmetic means over a demand history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub faulty_program: f64,
    pub meter_complaint: f64,
    pub meter_leak: f64,
}

/// Mean of each count field across `records`.
///
/// An empty history yields all-zero averages rather than NaN. Sums are
/// accumulated in `u64`, so no realistic history can overflow.
pub fn compute_averages<'a, I>(records: I) -> Averages
where
    I: IntoIterator<Item = &'a DemandRecord>,
{
    let mut n: u64 = 0;
    let (mut faulty, mut complaint, mut leak) = (0u64, 0u64, 0u64);

    for r in records {
        n += 1;
        faulty += u64::from(r.faulty_program);
        complaint += u64::from(r.meter_complaint);
        leak += u64::from(r.meter_leak);
    }

    if n == 0 {
        return Averages::default();
    }

    let n = n as f64;
    Averages {
        faulty_program: faulty as f64 / n,
        meter_complaint: complaint as f64 / n,
        meter_leak: leak as f64 / n,
    }
}
