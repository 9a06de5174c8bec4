//! Enemy Module

use crate::item::ComplexItem;

/// A hostile creature. Lives in its room's enemy table until its hp runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    /// Damage dealt to the player on a successful attack.
    pub attack: i32,
    /// Probability that the enemy's attack lands.
    pub chance: f64,
    /// Checked with the same decile roll as `chance`: the attack is evaded when the
    /// roll is at or below this value.
    pub evasion_chance: f64,
    /// Released into the room when the enemy dies.
    pub drop: Option<ComplexItem>,
}
impl Enemy {
    pub fn new(name: impl Into<String>, hp: i32, attack: i32) -> Enemy {
        Enemy {
            name: name.into(),
            hp,
            attack,
            chance: 1.0,
            evasion_chance: 0.0,
            drop: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overkill_damage_bottoms_out() {
        let mut enemy = Enemy::new("lich", 3, 1);
        enemy.take_damage(5);
        assert_eq!(enemy.hp, -2);
        assert!(enemy.is_dead());
        enemy.take_damage(i32::MAX);
        assert_eq!(enemy.hp, i32::MIN);
    }
}
