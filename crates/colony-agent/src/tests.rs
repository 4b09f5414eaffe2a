//! Unit tests for colony-agent.

#[cfg(test)]
mod house {
    use colony_core::SimRng;
    use crate::{AgentRates, House};

    fn rates(willingness: f64) -> AgentRates {
        AgentRates { house_willingness: willingness, ..AgentRates::default() }
    }

    #[test]
    fn unwilling_house_never_changes() {
        let mut rng = SimRng::new(1);
        let mut house = House::new(&rates(0.0), &mut rng);
        assert!(!house.puts_food);
        for _ in 0..1_000 {
            house.step(&mut rng);
        }
        assert!(!house.food);
    }

    #[test]
    fn willing_house_starts_full_and_restocks() {
        let mut rng = SimRng::new(2);
        let mut house = House::new(&rates(1.0), &mut rng);
        assert!(house.puts_food);
        assert!(house.food);
        assert!(house.restock_probability > 0.0 && house.restock_probability <= 1.0);

        assert!(house.take_food());
        assert!(!house.take_food());
        house.restock_probability = 1.0;
        house.step(&mut rng);
        assert!(house.food);
    }
}

#[cfg(test)]
mod restaurant {
    use colony_core::SimRng;
    use crate::{AgentRates, Restaurant};

    #[test]
    fn growth_rate_starts_at_or_above_floor() {
        let rates = AgentRates::default();
        let mut rng = SimRng::new(3);
        for _ in 0..50 {
            let r = Restaurant::new(&rates, &mut rng);
            assert!(r.growth_rate >= r.growth_floor);
            assert_eq!(r.growth_floor, 48);
        }
    }

    #[test]
    fn arrival_tightens_growth_toward_floor() {
        let rates = AgentRates::default();
        let mut rng = SimRng::new(4);
        let mut r = Restaurant::new(&rates, &mut rng);
        r.mice_population = 10;
        r.growth_rate = 200;
        r.ticks_until_new_mouse = 1;
        r.step(&mut rng);
        assert_eq!(r.mice_population, 11);
        assert_eq!(r.growth_rate, 180);
        assert!((r.capture_probability - 0.11).abs() < 1e-12);

        let mut previous = r.growth_rate;
        for _ in 0..10_000 {
            r.step(&mut rng);
            assert!(r.growth_rate <= previous);
            assert!(r.growth_rate >= r.growth_floor);
            previous = r.growth_rate;
        }
        assert_eq!(r.growth_rate, r.growth_floor);
    }

    #[test]
    fn capture_probability_caps_at_one() {
        let rates = AgentRates::default();
        let mut rng = SimRng::new(5);
        let mut r = Restaurant::new(&rates, &mut rng);
        r.mice_population = 150;
        r.ticks_until_new_mouse = 1;
        r.step(&mut rng);
        assert_eq!(r.capture_probability, 1.0);
    }

    #[test]
    fn catch_mouse_updates_counters() {
        let rates = AgentRates::default();
        let mut rng = SimRng::new(6);
        let mut r = Restaurant::new(&rates, &mut rng);
        r.mice_population = 1;
        let growth = r.growth_rate;
        assert!(r.catch_mouse());
        assert_eq!(r.mice_population, 0);
        assert_eq!(r.mice_caught, 1);
        assert_eq!(r.growth_rate, growth + 4);
        assert_eq!(r.capture_probability, 0.0);
        assert!(!r.catch_mouse());
        assert_eq!(r.mice_caught, 1);
    }
}

#[cfg(test)]
mod cat {
    use colony_core::{GridPos, SimRng};
    use crate::{AgentRates, Cat, Sex};

    fn cat(sex: Sex) -> (Cat, SimRng) {
        let mut rng = SimRng::new(7);
        let cat = Cat::new(sex, &AgentRates::default(), &mut rng);
        (cat, rng)
    }

    #[test]
    fn females_are_not_aggressive() {
        let mut rng = SimRng::new(8);
        for _ in 0..20 {
            let c = Cat::new(Sex::Female, &AgentRates::default(), &mut rng);
            assert_eq!(c.aggressiveness, 0.0);
            assert!((0.0..1.0).contains(&c.hunt_ability));
            assert!(c.hunger_period >= 1);
        }
    }

    #[test]
    fn hunger_counts_down_past_zero() {
        let (mut c, _) = cat(Sex::Male);
        c.ticks_until_hungry = 2;
        c.advance_hunger();
        assert!(!c.is_hungry);
        c.advance_hunger();
        assert!(c.is_hungry);
        c.advance_hunger();
        assert_eq!(c.ticks_until_hungry, -1);
        assert!(c.is_hungry);
    }

    #[test]
    fn eating_resets_episode() {
        let (mut c, mut rng) = cat(Sex::Male);
        c.is_hungry = true;
        c.give_up_searching = true;
        c.ticks_until_hungry = -200;
        c.eat(GridPos::new(4, 5), &mut rng);
        assert!(!c.is_hungry);
        assert!(!c.give_up_searching);
        assert!(c.ticks_until_hungry >= 0);
        assert_eq!(c.last_known_food, Some(GridPos::new(4, 5)));
    }

    #[test]
    fn meals_redraw_the_hunger_timer_around_the_period() {
        let (mut c, mut rng) = cat(Sex::Female);
        c.hunger_period = 24;
        let samples: Vec<i64> = (0..2_000)
            .map(|_| {
                c.is_hungry = true;
                c.ticks_until_hungry = -10;
                c.eat(GridPos::new(0, 0), &mut rng);
                c.ticks_until_hungry
            })
            .collect();

        assert!(samples.iter().all(|&t| t >= 0));
        let distinct: std::collections::HashSet<i64> = samples.iter().copied().collect();
        assert!(distinct.len() > 10, "only {} distinct draws", distinct.len());
        let mean = samples.iter().sum::<i64>() as f64 / samples.len() as f64;
        assert!((23.0..25.0).contains(&mean), "mean {mean}");
    }

    #[test]
    fn sleep_cycle() {
        let (mut c, mut rng) = cat(Sex::Female);
        c.ticks_until_sleepy = 1;
        c.sleep_duration_mean = 5;
        c.advance_sleep(&mut rng);
        assert!(c.is_asleep && c.is_sleepy);

        c.ticks_until_awake = 1;
        c.advance_sleep(&mut rng);
        assert!(!c.is_asleep && !c.is_sleepy);
    }

    #[test]
    fn only_open_females_conceive() {
        let (mut male, _) = cat(Sex::Male);
        assert!(!male.conceive(10));
        let (mut female, _) = cat(Sex::Female);
        assert!(female.conceive(10));
        assert!(!female.conceive(10));
        assert_eq!(female.ticks_until_birth, Some(10));
        assert!(!female.is_available_mate());
    }

    #[test]
    fn gestation_fires_once() {
        let (mut c, _) = cat(Sex::Female);
        c.conceive(2);
        assert!(!c.advance_gestation());
        assert!(c.advance_gestation());
        assert!(!c.pregnant);
        assert_eq!(c.ticks_until_birth, None);
        assert!(!c.advance_gestation());
    }
}

#[cfg(test)]
mod store {
    use colony_core::{AgentId, SimRng};
    use colony_grid::Terrain;
    use crate::{Agent, AgentError, AgentRates, AgentStore, Cat, House, Sex};

    #[test]
    fn rosters_follow_kind() {
        let rates = AgentRates::default();
        let mut rng = SimRng::new(9);
        let mut store = AgentStore::new();
        let street = store.insert(Agent::Street).unwrap();
        let house = store.insert(Agent::House(House::new(&rates, &mut rng))).unwrap();
        let cat = store.insert(Agent::Cat(Cat::new(Sex::Male, &rates, &mut rng))).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.cats(), &[cat]);
        assert_eq!(store.houses(), &[house]);
        assert!(store.restaurants().is_empty());
        assert_eq!(store.get(street).and_then(Agent::terrain), Some(Terrain::Street));
    }

    #[test]
    fn remove_clears_roster_and_ids_are_not_reused() {
        let rates = AgentRates::default();
        let mut rng = SimRng::new(10);
        let mut store = AgentStore::new();
        let a = store.insert(Agent::Cat(Cat::new(Sex::Male, &rates, &mut rng))).unwrap();
        let b = store.insert(Agent::Cat(Cat::new(Sex::Female, &rates, &mut rng))).unwrap();
        store.remove(a).unwrap();
        assert_eq!(store.cats(), &[b]);
        assert!(!store.contains(a));
        assert!(matches!(store.remove(a), Err(AgentError::NotFound(_))));

        let c = store.insert(Agent::Cat(Cat::new(Sex::Male, &rates, &mut rng))).unwrap();
        assert_eq!(c, AgentId(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.cat_count(), 2);
    }

    #[test]
    fn wrong_kind_reported() {
        let mut store = AgentStore::new();
        let shop = store.insert(Agent::Shop).unwrap();
        let err = store.cat(shop).unwrap_err();
        assert!(matches!(err, AgentError::WrongKind { expected: "cat", actual: "shop", .. }));
    }

    #[test]
    fn markers_exclude_active_terrain() {
        assert!(Agent::marker(Terrain::Street).is_some());
        assert!(Agent::marker(Terrain::House).is_none());
        assert!(!Agent::Backyard.is_scheduled());
    }
}
