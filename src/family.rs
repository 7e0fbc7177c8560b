use crate::graticule::{Graticule, Orientation};

/// Graticule records partitioned into the two orientation families.
/// Membership is fixed at construction; records never move between families.
#[derive(Clone, Debug, Default)]
pub struct FamilySplit {
    pub lat: Vec<Graticule>,
    pub lon: Vec<Graticule>,
}

impl FamilySplit {
    pub fn family(&self, orientation: Orientation) -> &[Graticule] {
        match orientation {
            Orientation::Lat => &self.lat,
            Orientation::Lon => &self.lon,
        }
    }
}

/// Partitions parsed records by orientation, preserving input order within
/// each family.
pub fn split_families(records: Vec<Graticule>) -> FamilySplit {
    let mut split = FamilySplit::default();
    for record in records {
        match record.orientation {
            Orientation::Lat => split.lat.push(record),
            Orientation::Lon => split.lon.push(record),
        }
    }
    split
}

/// Sorts one family ascending by signed map value. All records must share
/// an orientation; a mixed slice panics.
pub fn sort_by_real_value(family: &mut [Graticule]) {
    family.sort_by(|a, b| a.cmp_within_family(b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graticule::Direction;

    fn lat(direction: Direction, magnitude: u32) -> Graticule {
        Graticule::new(
            Orientation::Lat,
            direction,
            magnitude,
            [0.0, 0.0],
            [1.0, 0.0],
        )
    }

    fn lon(direction: Direction, magnitude: u32) -> Graticule {
        Graticule::new(
            Orientation::Lon,
            direction,
            magnitude,
            [0.0, 0.0],
            [0.0, 1.0],
        )
    }

    #[test]
    fn split_partitions_by_orientation() {
        let records = vec![
            lat(Direction::N, 100),
            lon(Direction::E, 200),
            lat(Direction::S, 300),
            lon(Direction::W, 400),
            lon(Direction::E, 0),
        ];
        let split = split_families(records);
        assert_eq!(split.lat.len(), 2);
        assert_eq!(split.lon.len(), 3);
        assert!(split.lat.iter().all(|g| g.orientation == Orientation::Lat));
        assert!(split.lon.iter().all(|g| g.orientation == Orientation::Lon));
        // Input order survives within a family.
        assert_eq!(split.lat[0].real_value(), 100);
        assert_eq!(split.lat[1].real_value(), -300);
    }

    #[test]
    fn sort_orders_by_signed_value() {
        let mut family = vec![
            lat(Direction::N, 700),
            lat(Direction::S, 100),
            lat(Direction::N, 0),
            lat(Direction::S, 400),
        ];
        sort_by_real_value(&mut family);
        let values: Vec<i64> = family.iter().map(|g| g.real_value()).collect();
        assert_eq!(values, vec![-400, -100, 0, 700]);
    }

    #[test]
    fn sort_then_reverse_gives_descending_order() {
        let mut family = vec![
            lon(Direction::E, 500),
            lon(Direction::W, 500),
            lon(Direction::E, 0),
        ];
        sort_by_real_value(&mut family);
        let ascending: Vec<i64> = family.iter().map(|g| g.real_value()).collect();
        family.reverse();
        let descending: Vec<i64> = family.iter().map(|g| g.real_value()).collect();
        let mut expected = ascending.clone();
        expected.reverse();
        assert_eq!(descending, expected);
    }
}
