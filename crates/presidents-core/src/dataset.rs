//! The compiled-in roster: ordinals 1 through 42.
//!
//! The sheet is fixed at 42 rows so that the 94-point baseline and the
//! 168-field maximum hold, which is why it stops at #42 and no record carries
//! a running ("present") term. Rosters loaded from TOML can end on an open
//! term via `end_label = "present"`.

use crate::model::{Party, PresidentRecord};

use Party::{Democrat, DemocraticRepublican, Federalist, NationalUnion, Republican, Whig};

struct Seed {
    number: u32,
    full_name: &'static str,
    last_name: &'static str,
    aliases: &'static [&'static str],
    start_year: i32,
    end_year: i32,
    party: Party,
    details: &'static str,
}

const fn seed(
    number: u32,
    full_name: &'static str,
    last_name: &'static str,
    aliases: &'static [&'static str],
    years: (i32, i32),
    party: Party,
    details: &'static str,
) -> Seed {
    Seed {
        number,
        full_name,
        last_name,
        aliases,
        start_year: years.0,
        end_year: years.1,
        party,
        details,
    }
}

#[rustfmt::skip]
const SEEDS: [Seed; 42] = [
    seed(1, "George Washington", "Washington", &["GW"], (1789, 1797), Party::None,
        "Neutrality Proclamation, Whiskey Rebellion, Farewell Address"),
    seed(2, "John Adams", "Adams", &[], (1797, 1801), Federalist,
        "XYZ Affair, Quasi-War, Alien and Sedition Acts"),
    seed(3, "Thomas Jefferson", "Jefferson", &[], (1801, 1809), DemocraticRepublican,
        "Louisiana Purchase, Embargo Act of 1807"),
    seed(4, "James Madison", "Madison", &[], (1809, 1817), DemocraticRepublican,
        "War of 1812, Second Bank of the United States"),
    seed(5, "James Monroe", "Monroe", &[], (1817, 1825), DemocraticRepublican,
        "Era of Good Feelings, Missouri Compromise, Monroe Doctrine"),
    seed(6, "John Quincy Adams", "Adams", &["JQA"], (1825, 1829), DemocraticRepublican,
        "Corrupt Bargain, Tariff of Abominations"),
    seed(7, "Andrew Jackson", "Jackson", &["Old Hickory"], (1829, 1837), Democrat,
        "Indian Removal Act, Nullification Crisis, Bank War"),
    seed(8, "Martin Van Buren", "Van Buren", &["Van Buren"], (1837, 1841), Democrat,
        "Panic of 1837, Independent Treasury"),
    seed(9, "William Henry Harrison", "Harrison", &["William Harrison"], (1841, 1841), Whig,
        "Died a month into his term"),
    seed(10, "John Tyler", "Tyler", &[], (1841, 1845), Whig,
        "Annexation of Texas, expelled by the Whigs"),
    seed(11, "James K. Polk", "Polk", &["James Polk"], (1845, 1849), Democrat,
        "Manifest Destiny, Mexican-American War, Oregon Treaty"),
    seed(12, "Zachary Taylor", "Taylor", &[], (1849, 1850), Whig,
        "California statehood debate, died in office"),
    seed(13, "Millard Fillmore", "Fillmore", &[], (1850, 1853), Whig,
        "Compromise of 1850, Fugitive Slave Act"),
    seed(14, "Franklin Pierce", "Pierce", &[], (1853, 1857), Democrat,
        "Kansas-Nebraska Act, Gadsden Purchase"),
    seed(15, "James Buchanan", "Buchanan", &[], (1857, 1861), Democrat,
        "Dred Scott decision, secession of the lower South"),
    seed(16, "Abraham Lincoln", "Lincoln", &["Abe Lincoln", "Honest Abe"], (1861, 1865), Republican,
        "Civil War, Emancipation Proclamation, Gettysburg Address"),
    seed(17, "Andrew Johnson", "Johnson", &[], (1865, 1869), NationalUnion,
        "Presidential Reconstruction, impeachment"),
    seed(18, "Ulysses S. Grant", "Grant", &["Ulysses Grant"], (1869, 1877), Republican,
        "Reconstruction, Credit Mobilier scandal"),
    seed(19, "Rutherford B. Hayes", "Hayes", &["Rutherford Hayes"], (1877, 1881), Republican,
        "Compromise of 1877, end of Reconstruction, Great Railroad Strike"),
    seed(20, "James A. Garfield", "Garfield", &["James Garfield"], (1881, 1881), Republican,
        "Assassinated by a disappointed office seeker"),
    seed(21, "Chester A. Arthur", "Arthur", &["Chester Arthur"], (1881, 1885), Republican,
        "Pendleton Civil Service Act, Chinese Exclusion Act"),
    seed(22, "Grover Cleveland", "Cleveland", &[], (1885, 1889), Democrat,
        "Interstate Commerce Act, Dawes Act"),
    seed(23, "Benjamin Harrison", "Harrison", &[], (1889, 1893), Republican,
        "Sherman Antitrust Act, McKinley Tariff"),
    seed(24, "Grover Cleveland", "Cleveland", &[], (1893, 1897), Democrat,
        "Panic of 1893, Pullman Strike"),
    seed(25, "William McKinley", "McKinley", &[], (1897, 1901), Republican,
        "Spanish-American War, annexation of Hawaii, Open Door policy"),
    seed(26, "Theodore Roosevelt", "Roosevelt", &["Teddy Roosevelt", "TR"], (1901, 1909), Republican,
        "Square Deal, trust busting, Panama Canal, Roosevelt Corollary"),
    seed(27, "William Howard Taft", "Taft", &["William Taft"], (1909, 1913), Republican,
        "Dollar Diplomacy, Payne-Aldrich Tariff"),
    seed(28, "Woodrow Wilson", "Wilson", &[], (1913, 1921), Democrat,
        "New Freedom, World War I, Fourteen Points, League of Nations"),
    seed(29, "Warren G. Harding", "Harding", &["Warren Harding"], (1921, 1923), Republican,
        "Return to Normalcy, Teapot Dome scandal"),
    seed(30, "Calvin Coolidge", "Coolidge", &["Silent Cal"], (1923, 1929), Republican,
        "Pro-business policies, Kellogg-Briand Pact"),
    seed(31, "Herbert Hoover", "Hoover", &[], (1929, 1933), Republican,
        "Stock market crash, start of the Great Depression"),
    seed(32, "Franklin D. Roosevelt", "Roosevelt",
        &["FDR", "Franklin Roosevelt", "Franklin Delano Roosevelt"], (1933, 1945), Democrat,
        "New Deal, World War II"),
    seed(33, "Harry S. Truman", "Truman", &["Harry Truman"], (1945, 1953), Democrat,
        "Atomic bomb, Truman Doctrine, Marshall Plan, Korean War"),
    seed(34, "Dwight D. Eisenhower", "Eisenhower", &["Dwight Eisenhower", "Ike"], (1953, 1961), Republican,
        "Interstate Highway Act, Eisenhower Doctrine, Little Rock"),
    seed(35, "John F. Kennedy", "Kennedy", &["JFK", "John Kennedy"], (1961, 1963), Democrat,
        "Bay of Pigs, Cuban Missile Crisis, New Frontier"),
    seed(36, "Lyndon B. Johnson", "Johnson", &["LBJ", "Lyndon Johnson"], (1963, 1969), Democrat,
        "Great Society, Civil Rights Act, Vietnam escalation"),
    seed(37, "Richard Nixon", "Nixon", &["Richard M. Nixon"], (1969, 1974), Republican,
        "Detente, opening to China, Watergate"),
    seed(38, "Gerald Ford", "Ford", &["Gerald R. Ford"], (1974, 1977), Republican,
        "Pardon of Nixon, fall of Saigon"),
    seed(39, "Jimmy Carter", "Carter", &["James Carter", "James Earl Carter"], (1977, 1981), Democrat,
        "Camp David Accords, Iran hostage crisis"),
    seed(40, "Ronald Reagan", "Reagan", &[], (1981, 1989), Republican,
        "Reaganomics, end of the Cold War, Iran-Contra"),
    seed(41, "George H. W. Bush", "Bush", &["George Bush", "Bush Sr"], (1989, 1993), Republican,
        "Gulf War, Americans with Disabilities Act"),
    seed(42, "Bill Clinton", "Clinton", &["William Clinton", "William Jefferson Clinton"], (1993, 2001), Democrat,
        "NAFTA, welfare reform, impeachment"),
];

/// Owned copies of the compiled-in records, in ascending ordinal order.
pub fn builtin_records() -> Vec<PresidentRecord> {
    SEEDS
        .iter()
        .map(|s| PresidentRecord {
            number: s.number,
            full_name: s.full_name.to_string(),
            last_name: s.last_name.to_string(),
            aliases: s.aliases.iter().map(|a| a.to_string()).collect(),
            start_year: s.start_year,
            end_year: s.end_year,
            end_label: None,
            party: s.party,
            details: Some(s.details.to_string()),
            image_url: None,
        })
        .collect()
}
