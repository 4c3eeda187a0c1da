use super::model::RawTable;

/// Column headers of the embedded sample, as in the Seoul open-data export.
pub static SAMPLE_HEADERS: [&str; 5] = ["화장실명", "소재지도로명주소", "개방시간", "위도", "경도"];

/// Public restrooms around Seoul City Hall plaza.
pub static SAMPLE_ROWS: [[&str; 5]; 5] = [
    ["서울광장화장실", "서울특별시 중구 세종대로 110", "09:00~18:00", "37.5663", "126.9779"],
    ["시청역화장실", "서울특별시 중구 세종대로 지하101", "24시간", "37.5656", "126.9784"],
    ["덕수궁화장실", "서울특별시 중구 세종대로 99", "09:00~21:00", "37.5658", "126.9751"],
    ["청계광장화장실", "서울특별시 종로구 서린동 14", "06:00~23:00", "37.5691", "126.9780"],
    ["광화문역화장실", "서울특별시 종로구 세종대로 172", "05:30~23:50", "37.5714", "126.9765"],
];

/// The embedded sample as a raw table, used when no data file is supplied.
pub fn sample_table() -> RawTable {
    RawTable::new(
        SAMPLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        SAMPLE_ROWS
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}
