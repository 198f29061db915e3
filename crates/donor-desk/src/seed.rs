//! Demo inventory mirroring the staff dashboard's sample data: twenty donors, the
//! units collected from them and the bedside records of those sessions. Also the
//! donation centres and public drives offered to donors.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::workflows::appointments::{BloodDrive, DonationLocation};

use crate::workflows::blood_type::{BloodType, UnknownBloodType};
use crate::workflows::blood_units::{
    BloodUnit, BloodUnitId, InvalidUnit, MemoryBloodUnitRepository, RepositoryError, UnitStatus,
};
use crate::workflows::donors::{Donor, DonorId};
use crate::workflows::records::{DonationRecord, DonationRecordId, DonationType, TestResult};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed date '{value}' is malformed")]
    InvalidDate {
        value: &'static str,
        #[source]
        source: chrono::ParseError,
    },
    #[error("seed status '{0}' is unknown")]
    InvalidStatus(&'static str),
    #[error(transparent)]
    BloodType(#[from] UnknownBloodType),
    #[error(transparent)]
    Unit(#[from] InvalidUnit),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

type DonorRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    &'static str,
);

// id, name, email, birth date, blood type, last donation, total donations, phone
#[rustfmt::skip]
const DONORS: [DonorRow; 20] = [
    (1, "Nguyễn Văn Anh", "nguyen.van.anh@email.com", "1990-05-15", "A+", "2024-01-10", 12, "0901234567"),
    (2, "Trần Thị Bình", "tran.thi.binh@email.com", "1985-08-22", "O-", "2023-11-25", 8, "0912345678"),
    (3, "Lê Minh Cường", "le.minh.cuong@email.com", "1992-03-10", "B+", "2024-01-05", 15, "0923456789"),
    (4, "Phạm Thị Dung", "pham.thi.dung@email.com", "1988-12-03", "AB+", "2023-12-20", 6, "0934567890"),
    (5, "Võ Văn Em", "vo.van.em@email.com", "1995-07-18", "A-", "2024-01-15", 4, "0945678901"),
    (6, "Đặng Thị Phương", "dang.thi.phuong@email.com", "1991-11-27", "O+", "2023-10-12", 18, "0956789012"),
    (7, "Hoàng Văn Giang", "hoang.van.giang@email.com", "1987-04-08", "B-", "2024-01-08", 9, "0967890123"),
    (8, "Bùi Thị Hằng", "bui.thi.hang@email.com", "1993-09-14", "AB-", "2023-12-15", 7, "0978901234"),
    (9, "Đỗ Minh Quang", "do.minh.quang@email.com", "1989-01-30", "A+", "2023-09-20", 22, "0989012345"),
    (10, "Ngô Thị Lan", "ngo.thi.lan@email.com", "1994-06-25", "O+", "2024-01-12", 3, "0990123456"),
    (11, "Dương Văn Minh", "duong.van.minh@email.com", "1986-10-05", "B+", "2023-08-15", 16, "0901234560"),
    (12, "Cao Thị Nga", "cao.thi.nga@email.com", "1996-02-12", "A-", "2024-01-03", 5, "0912345601"),
    (13, "Vũ Minh Tuấn", "vu.minh.tuan@email.com", "1984-08-17", "AB+", "2023-11-08", 13, "0923456012"),
    (14, "Lý Thị Oanh", "ly.thi.oanh@email.com", "1997-12-21", "O-", "2024-01-07", 2, "0934560123"),
    (15, "Trương Văn Phúc", "truong.van.phuc@email.com", "1983-05-09", "B-", "2023-07-25", 25, "0945601234"),
    (16, "Đinh Thị Quỳnh", "dinh.thi.quynh@email.com", "1998-03-16", "A+", "2024-01-14", 1, "0956012345"),
    (17, "Phan Minh Sơn", "phan.minh.son@email.com", "1990-11-04", "O+", "2023-12-28", 11, "0967123456"),
    (18, "Mai Thị Trang", "mai.thi.trang@email.com", "1992-07-23", "AB-", "2023-10-30", 14, "0978234567"),
    (19, "Hồ Văn Ước", "ho.van.uoc@email.com", "1987-01-11", "B+", "2024-01-01", 19, "0989345678"),
    (20, "Chu Thị Vân", "chu.thi.van@email.com", "1995-04-28", "A-", "2023-09-12", 10, "0990456789"),
];

type UnitRow = (
    &'static str,
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
);

// id, volume, blood type, donation date, expiry date, status, donor
#[rustfmt::skip]
const UNITS: [UnitRow; 20] = [
    ("BU20240101001", 450, "A+", "2024-01-15", "2024-03-15", "approved", 1),
    ("BU20240101002", 450, "O-", "2024-01-14", "2024-03-14", "pending", 2),
    ("BU20240101003", 350, "B+", "2024-01-13", "2024-03-13", "approved", 3),
    ("BU20240101004", 450, "AB+", "2024-01-12", "2024-03-12", "denied", 4),
    ("BU20240101005", 450, "A-", "2024-01-11", "2024-03-11", "approved", 5),
    ("BU20240101006", 400, "O+", "2024-01-10", "2024-03-10", "pending", 6),
    ("BU20240101007", 450, "B-", "2024-01-09", "2024-03-09", "approved", 7),
    ("BU20240101008", 450, "AB-", "2024-01-08", "2024-03-08", "approved", 8),
    ("BU20240101009", 350, "A+", "2024-01-07", "2024-03-07", "pending", 9),
    ("BU20240101010", 450, "O+", "2024-01-06", "2024-03-06", "approved", 10),
    ("BU20240101011", 450, "B+", "2024-01-05", "2024-03-05", "denied", 11),
    ("BU20240101012", 400, "A-", "2024-01-04", "2024-03-04", "approved", 12),
    ("BU20240101013", 450, "AB+", "2024-01-03", "2024-03-03", "pending", 13),
    ("BU20240101014", 450, "O-", "2024-01-02", "2024-03-02", "approved", 14),
    ("BU20240101015", 350, "B-", "2024-01-01", "2024-03-01", "approved", 15),
    ("BU20231201016", 450, "A+", "2023-12-31", "2024-02-29", "expired", 16),
    ("BU20231201017", 450, "O+", "2023-12-30", "2024-02-28", "approved", 17),
    ("BU20231201018", 400, "AB-", "2023-12-29", "2024-02-27", "pending", 18),
    ("BU20231201019", 450, "B+", "2023-12-28", "2024-02-26", "approved", 19),
    ("BU20231201020", 450, "A-", "2023-12-27", "2024-02-25", "denied", 20),
];

type RecordRow = (
    &'static str,
    u32,
    &'static str,
    &'static str,
    u16,
    f64,
    DonationType,
    u32,
    TestResult,
    &'static str,
);

// id, donor, donor name, donated at, weight, temperature, type, volume, result, note
#[rustfmt::skip]
const RECORDS: [RecordRow; 20] = [
    ("DR20240115001", 1, "Nguyễn Văn Anh", "2024-01-15 08:30:00", 65, 36.5, DonationType::WholeBlood, 450, TestResult::Good, "Người hiến khỏe mạnh, không có vấn đề gì trong quá trình hiến máu."),
    ("DR20240114001", 2, "Trần Thị Bình", "2024-01-14 09:15:00", 55, 36.8, DonationType::Plasma, 400, TestResult::Poor, "Phát hiện chỉ số hemoglobin thấp, cần theo dõi thêm."),
    ("DR20240113001", 3, "Lê Minh Cường", "2024-01-13 10:00:00", 70, 36.2, DonationType::WholeBlood, 450, TestResult::Good, "Tình trạng sức khỏe tốt, quá trình hiến máu suôn sẻ."),
    ("DR20240112001", 4, "Phạm Thị Dung", "2024-01-12 14:20:00", 58, 37.1, DonationType::Platelets, 300, TestResult::Poor, "Phát hiện một số chỉ số bất thường trong máu, cần kiểm tra lại trước khi sử dụng."),
    ("DR20240111001", 5, "Võ Văn Em", "2024-01-11 11:45:00", 62, 36.4, DonationType::WholeBlood, 450, TestResult::Good, "Người hiến lần đầu, rất hợp tác và không có phản ứng bất thường."),
    ("DR20240110001", 6, "Đặng Thị Phương", "2024-01-10 13:30:00", 60, 36.6, DonationType::Plasma, 400, TestResult::Good, "Người hiến kinh nghiệm, quá trình diễn ra thuận lợi."),
    ("DR20240109001", 7, "Hoàng Văn Giang", "2024-01-09 09:00:00", 68, 36.3, DonationType::WholeBlood, 450, TestResult::Good, "Sức khỏe tốt, không có tiền sử bệnh lý."),
    ("DR20240108001", 8, "Bùi Thị Hằng", "2024-01-08 15:15:00", 52, 36.7, DonationType::Platelets, 250, TestResult::Poor, "Cân nặng ở mức thấp, cần cân nhắc kỹ trước khi sử dụng."),
    ("DR20240107001", 9, "Đỗ Minh Quang", "2024-01-07 08:45:00", 75, 36.1, DonationType::WholeBlood, 450, TestResult::Good, "Người hiến máu thường xuyên, có kinh nghiệm tốt."),
    ("DR20240106001", 10, "Ngô Thị Lan", "2024-01-06 16:30:00", 57, 36.9, DonationType::Plasma, 350, TestResult::Good, "Quá trình hiến máu bình thường, không có vấn đề gì."),
    ("DR20240105001", 11, "Dương Văn Minh", "2024-01-05 12:00:00", 72, 36.4, DonationType::WholeBlood, 450, TestResult::Good, "Tình trạng sức khỏe ổn định, hiến máu thành công."),
    ("DR20240104001", 12, "Cao Thị Nga", "2024-01-04 10:30:00", 59, 36.5, DonationType::Platelets, 300, TestResult::Poor, "Xét nghiệm phát hiện một số chỉ số bất thường, cần kiểm tra lại."),
    ("DR20240103001", 13, "Vũ Minh Tuấn", "2024-01-03 14:45:00", 66, 36.2, DonationType::Plasma, 400, TestResult::Good, "Người hiến hợp tác tốt, không có phản ứng phụ."),
    ("DR20240102001", 14, "Lý Thị Oanh", "2024-01-02 11:15:00", 54, 36.7, DonationType::WholeBlood, 400, TestResult::Good, "Người hiến trẻ tuổi, sức khỏe tốt."),
    ("DR20240101001", 15, "Trương Văn Phúc", "2024-01-01 15:00:00", 78, 36.3, DonationType::WholeBlood, 450, TestResult::Good, "Người hiến có kinh nghiệm lâu năm, rất tin cậy."),
    ("DR20231231001", 16, "Đinh Thị Quỳnh", "2023-12-31 09:30:00", 56, 36.8, DonationType::Plasma, 350, TestResult::Poor, "Xét nghiệm phát hiện một số chỉ số bất thường, cần kiểm tra kỹ trước khi sử dụng."),
    ("DR20231230001", 17, "Phan Minh Sơn", "2023-12-30 13:15:00", 69, 36.1, DonationType::WholeBlood, 450, TestResult::Good, "Quá trình hiến máu diễn ra suôn sẻ, không có vấn đề."),
    ("DR20231229001", 18, "Mai Thị Trang", "2023-12-29 16:45:00", 61, 36.6, DonationType::Platelets, 280, TestResult::Good, "Tình trạng sức khỏe ổn định, hiến máu thành công."),
    ("DR20231228001", 19, "Hồ Văn Ước", "2023-12-28 12:30:00", 73, 36.4, DonationType::WholeBlood, 450, TestResult::Good, "Người hiến có sức khỏe tốt, quá trình hiến máu bình thường."),
    ("DR20231227001", 20, "Chu Thị Vân", "2023-12-27 10:00:00", 58, 37.0, DonationType::Plasma, 380, TestResult::Poor, "Nhiệt độ cơ thể hơi cao, cần kiểm tra lại các chỉ số."),
];

const LOCATIONS: [(u32, &str, &str); 5] = [
    (1, "Main City Blood Center", "123 Main St"),
    (2, "Eastside Community Hospital", "456 East Ave"),
    (3, "Westview Medical Center", "789 West Blvd"),
    (4, "North County Mobile Drive", "321 North Rd"),
    (5, "South Campus Donation Center", "654 South St"),
];

type DriveRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
);

#[rustfmt::skip]
const DRIVES: [DriveRow; 3] = [
    (1, "Community Center Blood Drive", "123 Main St", "Anytown", "2025-05-20", "09:00", "15:00", 2.3),
    (3, "Downtown Medical Center", "789 Medical Blvd", "Anytown", "2025-05-25", "08:00", "18:00", 4.5),
    (2, "Local High School Drive", "456 School Ave", "Anytown", "2025-05-22", "10:00", "16:00", 3.1),
];

/// Everything the dashboard shows out of the box.
#[derive(Debug, Clone)]
pub struct DemoInventory {
    pub donors: Vec<Donor>,
    pub units: Vec<BloodUnit>,
    pub records: Vec<DonationRecord>,
    pub drives: Vec<BloodDrive>,
}

impl DemoInventory {
    pub fn load() -> Result<Self, SeedError> {
        Ok(Self {
            donors: donors()?,
            units: units()?,
            records: records()?,
            drives: blood_drives()?,
        })
    }

    pub fn unit_repository(&self) -> Result<MemoryBloodUnitRepository, SeedError> {
        Ok(MemoryBloodUnitRepository::with_units(self.units.clone())?)
    }
}

fn date(value: &'static str) -> Result<NaiveDate, SeedError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|source| SeedError::InvalidDate { value, source })
}

fn clock(value: &'static str) -> Result<NaiveTime, SeedError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|source| SeedError::InvalidDate { value, source })
}

fn timestamp(value: &'static str) -> Result<NaiveDateTime, SeedError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map_err(|source| SeedError::InvalidDate { value, source })
}

pub fn donors() -> Result<Vec<Donor>, SeedError> {
    DONORS.iter().map(donor_from_row).collect()
}

pub fn units() -> Result<Vec<BloodUnit>, SeedError> {
    UNITS.iter().map(unit_from_row).collect()
}

pub fn records() -> Result<Vec<DonationRecord>, SeedError> {
    RECORDS.iter().map(record_from_row).collect()
}

/// Donation centres that take appointments.
pub fn locations() -> Vec<DonationLocation> {
    LOCATIONS
        .iter()
        .map(|&(id, name, address)| DonationLocation {
            id,
            name: name.to_string(),
            address: address.to_string(),
        })
        .collect()
}

pub fn blood_drives() -> Result<Vec<BloodDrive>, SeedError> {
    DRIVES.iter().map(drive_from_row).collect()
}

fn drive_from_row(row: &DriveRow) -> Result<BloodDrive, SeedError> {
    let &(id, name, address, city, day, starts, ends, distance) = row;
    Ok(BloodDrive {
        id,
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        date: date(day)?,
        starts_at: clock(starts)?,
        ends_at: clock(ends)?,
        distance_miles: distance,
    })
}

fn donor_from_row(row: &DonorRow) -> Result<Donor, SeedError> {
    let &(id, name, email, birth, blood_type, last, total, phone) = row;
    Ok(Donor {
        id: DonorId(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        blood_type: blood_type.parse::<BloodType>()?,
        birth_date: date(birth)?,
        last_donation_date: Some(date(last)?),
        total_donations: total,
    })
}

fn unit_from_row(row: &UnitRow) -> Result<BloodUnit, SeedError> {
    let &(id, volume, blood_type, donated, expires, status, donor) = row;
    let status = status
        .parse::<UnitStatus>()
        .map_err(|_| SeedError::InvalidStatus(status))?;
    let unit = BloodUnit::new(
        BloodUnitId::from(id),
        blood_type.parse::<BloodType>()?,
        volume,
        date(donated)?,
        date(expires)?,
        DonorId(donor),
    )?;
    Ok(unit.with_status(status))
}

fn record_from_row(row: &RecordRow) -> Result<DonationRecord, SeedError> {
    let &(id, donor, name, at, weight, temperature, kind, volume, result, note) = row;
    Ok(DonationRecord {
        id: DonationRecordId::from(id),
        donor_id: DonorId(donor),
        donor_name: name.to_string(),
        donated_at: timestamp(at)?,
        donor_weight_kg: weight,
        donor_temperature_c: temperature,
        donation_type: kind,
        volume_ml: volume,
        test_result: result,
        note: note.to_string(),
    })
}
